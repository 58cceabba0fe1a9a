//! Monte Carlo critical values and p-values for rank based tests.
//!
//! The null distribution of the Mann-Whitney, Kruskal-Wallis,
//! Kolmogorov-Smirnov and Kuiper statistics is simulated by repeatedly
//! assigning the ranks `1..=N` at random to groups of the given sizes.
//! Trials run in parallel, each with its own seeded generator, and the
//! resulting sample is summarised by quantiles (critical values) and,
//! optionally, the proportion of simulated values beyond an observed
//! statistic.

#[macro_use]
extern crate log;

pub mod error;
pub mod groups;
pub mod monte_carlo;
pub mod sampler;
pub mod statistic;
pub mod summary;
pub mod trials;

pub use error::{McError, McResult};
pub use groups::GroupSizes;
pub use monte_carlo::{compute_critical_values, McOutcome, McParams, DEFAULT_REPS};
pub use statistic::RankTest;
pub use summary::{parse_observed, CriticalValueTable, DistributionSample};
