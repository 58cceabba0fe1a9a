use rank_mc::{GroupSizes, McParams, RankTest};

mod getters;
mod mk_config;

pub struct Config {
    test: RankTest,
    groups: GroupSizes,
    params: McParams,
}
