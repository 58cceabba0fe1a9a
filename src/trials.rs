use std::time::Instant;

use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::{prelude::*, ThreadPoolBuilder};

use crate::{
    error::McResult,
    groups::GroupSizes,
    sampler::{create_rng, random_ranks, trial_seed},
    statistic::RankTest,
};

/// Runs the independent trials of one simulation on a private worker pool.
///
/// Trial `ix` samples with a generator seeded from `trial_seed(seed, ix)`,
/// and the results are returned in trial order, so the output depends only
/// on the seed and not on the number of threads or on scheduling.
pub struct TrialRunner<'a> {
    groups: &'a GroupSizes,
    test: RankTest,
    reps: usize,
    seed: u64,
    threads: usize,
    progress: ProgressBar,
}

impl<'a> TrialRunner<'a> {
    pub fn new(test: RankTest, groups: &'a GroupSizes, reps: usize, seed: u64) -> Self {
        Self {
            groups,
            test,
            reps,
            seed,
            threads: num_cpus::get(),
            progress: ProgressBar::hidden(),
        }
    }

    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Draw a progress bar on stderr while the trials run
    pub fn show_progress(self, show: bool) -> Self {
        if show {
            let pb = ProgressBar::new(self.reps as u64);
            pb.set_style(
                ProgressStyle::with_template(
                    "{msg} [{elapsed}] {wide_bar:.cyan/blue} {percent:>3}% {pos:>7}/{len:7} {eta}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            pb.set_message(self.test.name());
            self.progress_bar(pb)
        } else {
            self.progress_bar(ProgressBar::hidden())
        }
    }

    /// Report completed trials to `pb`
    pub fn progress_bar(mut self, pb: ProgressBar) -> Self {
        self.progress = pb;
        self
    }

    /// Run a single trial: one random rank assignment and its statistic
    pub fn trial(&self, ix: usize) -> McResult<f64> {
        let mut rng = create_rng(trial_seed(self.seed, ix));
        let sample = random_ranks(self.groups, &mut rng);
        self.test.statistic(&sample)
    }

    /// Run all trials, returning the simulated null distribution.
    ///
    /// The pool is created for this call and shut down before returning.
    /// The first failing trial aborts the run and its error is returned.
    pub fn run(&self) -> McResult<Vec<f64>> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .thread_name(|i| format!("rank-mc-worker-{}", i))
            .build()?;
        debug!(
            "Running {} {} trials for groups {} on {} threads (seed {})",
            self.reps,
            self.test,
            self.groups,
            pool.current_num_threads(),
            self.seed
        );

        let start = Instant::now();
        let res = pool.install(|| {
            (0..self.reps)
                .into_par_iter()
                .progress_with(self.progress.clone())
                .map(|ix| self.trial(ix))
                .collect::<McResult<Vec<f64>>>()
        });
        drop(pool);
        self.progress.finish();

        let dist = res?;
        info!(
            "{} {} trials completed in {:.2?}",
            dist.len(),
            self.test,
            start.elapsed()
        );
        Ok(dist)
    }
}
