//! Entry point tying the sampler, statistic, trial runner and summary
//! together.
//!
//! ```no_run
//! use rank_mc::{GroupSizes, McParams, RankTest};
//!
//! let groups = GroupSizes::new(&[20, 20]).unwrap();
//! let params = McParams {
//!     observed: Some(130.0),
//!     ..Default::default()
//! };
//! let res = RankTest::MannWhitney
//!     .compute_critical_values(&groups, &params)
//!     .unwrap();
//! println!("5% critical value: {:?}", res.table.get(0.05));
//! ```

use std::io;

use rand::Rng;

use crate::{
    error::{config_err, McResult},
    groups::GroupSizes,
    statistic::RankTest,
    summary::{parse_observed, write_report, CriticalValueTable, DistributionSample},
    trials::TrialRunner,
};

pub const DEFAULT_REPS: usize = 10000;

/// Parameters for one simulation run.
///
/// `quantiles` and `reverse` default to the values appropriate for the
/// test being run (see [`RankTest::default_quantiles`] and
/// [`RankTest::default_reverse`]).
#[derive(Debug, Clone)]
pub struct McParams {
    /// Number of trials
    pub reps: usize,
    /// Observed statistic for p-value computation; non-finite values are ignored
    pub observed: Option<f64>,
    /// Print the table to stdout and progress to stderr
    pub print: bool,
    pub quantiles: Option<Vec<f64>>,
    pub reverse: Option<bool>,
    /// Run seed; drawn from the thread RNG if absent
    pub seed: Option<u64>,
    /// Worker threads; number of logical CPUs if absent
    pub threads: Option<usize>,
}

impl Default for McParams {
    fn default() -> Self {
        Self {
            reps: DEFAULT_REPS,
            observed: None,
            print: true,
            quantiles: None,
            reverse: None,
            seed: None,
            threads: None,
        }
    }
}

impl McParams {
    /// Set the observed value from text.  Text that is not a finite number
    /// clears it, so no p-value is reported.
    pub fn with_observed_str(mut self, s: &str) -> Self {
        self.observed = parse_observed(s);
        self
    }

    fn check(&self) -> McResult<()> {
        if self.reps == 0 {
            return Err(config_err("Number of repetitions must be positive"));
        }
        if self.threads == Some(0) {
            return Err(config_err("Number of threads must be positive"));
        }
        if let Some(q) = self
            .quantiles
            .as_ref()
            .and_then(|v| v.iter().find(|q| !(0.0..=1.0).contains(*q)))
        {
            return Err(config_err(format!(
                "Quantile {} is not between 0 and 1",
                q
            )));
        }
        Ok(())
    }
}

/// Results of one simulation run
#[derive(Debug, Clone)]
pub struct McOutcome {
    pub table: CriticalValueTable,
    /// `None` if no usable observed value was given
    pub p_value: Option<f64>,
    /// Seed the run used, for reproduction
    pub seed: u64,
    pub distribution: DistributionSample,
}

/// Simulate the null distribution of `test` for the given group sizes and
/// summarise it.
///
/// Input is validated before any trial runs (configuration errors); an
/// error in any trial aborts the run.  When `params.print` is set, the
/// table and p-value are written to stdout and progress to stderr.
pub fn compute_critical_values(
    test: RankTest,
    groups: &GroupSizes,
    params: &McParams,
) -> McResult<McOutcome> {
    test.check_groups(groups)?;
    params.check()?;

    let quantiles = params
        .quantiles
        .as_deref()
        .unwrap_or_else(|| test.default_quantiles());
    let reverse = params.reverse.unwrap_or_else(|| test.default_reverse());
    let seed = params.seed.unwrap_or_else(|| rand::rng().random());
    let observed = params.observed.filter(|x| x.is_finite());
    if observed.is_none() {
        debug!("No usable observed value; p-value will not be computed");
    }

    let mut runner =
        TrialRunner::new(test, groups, params.reps, seed).show_progress(params.print);
    if let Some(t) = params.threads {
        runner = runner.threads(t)
    }
    let distribution = DistributionSample::new(runner.run()?);

    let table = distribution.critical_values(quantiles);
    let p_value = observed.map(|x| distribution.p_value(x, reverse));
    if let (Some(x), Some(p)) = (observed, p_value) {
        debug!(
            "Proportion of distribution {} {}: {}",
            if reverse { "above" } else { "below" },
            x,
            p
        );
    }

    if params.print {
        write_report(&mut io::stdout().lock(), &table, p_value, reverse)?;
    }

    Ok(McOutcome {
        table,
        p_value,
        seed,
        distribution,
    })
}
