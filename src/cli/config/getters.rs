use rank_mc::{GroupSizes, McParams, RankTest};

use super::Config;

impl Config {
    pub fn test(&self) -> RankTest {
        self.test
    }

    pub fn groups(&self) -> &GroupSizes {
        &self.groups
    }

    pub fn params(&self) -> &McParams {
        &self.params
    }
}
