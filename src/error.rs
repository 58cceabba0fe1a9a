use std::io;

use thiserror::Error;

/// Errors raised while setting up or running a Monte Carlo simulation.
///
/// A missing or unparseable observed value is not an error; it simply
/// results in no p-value being reported.
#[derive(Debug, Error)]
pub enum McError {
    /// Invalid input detected before any trial is run
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// Degenerate sample encountered inside a trial; aborts the whole run
    #[error("Computation error: {0}")]
    Computation(String),
    #[error("Could not set up worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("Output error: {0}")]
    Io(#[from] io::Error),
}

pub type McResult<T> = Result<T, McError>;

pub(crate) fn config_err<S: Into<String>>(s: S) -> McError {
    McError::Configuration(s.into())
}

pub(crate) fn comp_err<S: Into<String>>(s: S) -> McError {
    McError::Computation(s.into())
}
