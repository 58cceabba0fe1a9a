use std::fmt;

use crate::{
    error::{config_err, McResult},
    groups::GroupSizes,
    monte_carlo::{compute_critical_values, McOutcome, McParams},
    sampler::RankedSample,
};

mod ecdf;
mod kruskal_wallis;
mod mann_whitney;

pub use ecdf::{ecdf_extremes, kolmogorov_smirnov, kuiper};
pub use kruskal_wallis::kruskal_wallis;
pub use mann_whitney::{mann_whitney, u_statistic};

/// Quantiles reported by default for lower tail tests
pub const LOWER_TAIL_QUANTILES: [f64; 4] = [0.01, 0.025, 0.05, 0.1];

/// Quantiles reported by default for upper tail tests
pub const UPPER_TAIL_QUANTILES: [f64; 4] = [0.9, 0.95, 0.975, 0.99];

/// Rank based test whose null distribution is simulated.
///
/// The variant selects the statistic computed for each trial and supplies
/// the default quantiles and tail direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankTest {
    MannWhitney,
    KruskalWallis,
    KolmogorovSmirnov,
    Kuiper,
}

impl RankTest {
    pub const ALL: [RankTest; 4] = [
        Self::MannWhitney,
        Self::KruskalWallis,
        Self::KolmogorovSmirnov,
        Self::Kuiper,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::MannWhitney => "Mann-Whitney",
            Self::KruskalWallis => "Kruskal-Wallis",
            Self::KolmogorovSmirnov => "Kolmogorov-Smirnov",
            Self::Kuiper => "Kuiper",
        }
    }

    /// Name used for the command line subcommand
    pub fn cli_name(&self) -> &'static str {
        match self {
            Self::MannWhitney => "mann-whitney",
            Self::KruskalWallis => "kruskal-wallis",
            Self::KolmogorovSmirnov => "kolmogorov-smirnov",
            Self::Kuiper => "kuiper",
        }
    }

    /// Short alias for the command line subcommand
    pub fn cli_alias(&self) -> &'static str {
        match self {
            Self::MannWhitney => "mw",
            Self::KruskalWallis => "kw",
            Self::KolmogorovSmirnov => "ks",
            Self::Kuiper => "k",
        }
    }

    pub fn from_cli_name(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|t| t.cli_name() == s || t.cli_alias() == s)
            .copied()
    }

    /// Compute the test statistic for one ranked sample
    pub fn statistic(&self, sample: &RankedSample) -> McResult<f64> {
        match self {
            Self::MannWhitney => Ok(mann_whitney(sample)),
            Self::KruskalWallis => kruskal_wallis(sample),
            Self::KolmogorovSmirnov => kolmogorov_smirnov(sample),
            Self::Kuiper => kuiper(sample),
        }
    }

    pub fn default_quantiles(&self) -> &'static [f64] {
        match self {
            Self::MannWhitney => &LOWER_TAIL_QUANTILES,
            _ => &UPPER_TAIL_QUANTILES,
        }
    }

    /// Whether p-values count the simulated values above (true) or below
    /// (false) the observed value.  Only Mann-Whitney is a lower tail test.
    pub fn default_reverse(&self) -> bool {
        !matches!(self, Self::MannWhitney)
    }

    /// Check that the group sizes are usable for this test.
    ///
    /// The two sample tests need exactly two non-empty groups.  Kruskal-Wallis
    /// accepts any number of groups (empty groups do not contribute).
    pub fn check_groups(&self, groups: &GroupSizes) -> McResult<()> {
        match self {
            Self::KruskalWallis => Ok(()),
            _ => {
                if groups.n_groups() != 2 {
                    Err(config_err(format!(
                        "{} test requires exactly 2 groups (found {})",
                        self.name(),
                        groups.n_groups()
                    )))
                } else if groups.n(1) == 0 || groups.n(2) == 0 {
                    Err(config_err(format!(
                        "{} test requires both groups to be non-empty (sizes {})",
                        self.name(),
                        groups
                    )))
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Simulate the null distribution of this test; see
    /// [`compute_critical_values`].
    pub fn compute_critical_values(
        &self,
        groups: &GroupSizes,
        params: &McParams,
    ) -> McResult<McOutcome> {
        compute_critical_values(*self, groups, params)
    }
}

impl fmt::Display for RankTest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
