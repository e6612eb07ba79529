// Error handling module
// Defines the backend and benchmark error types

use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by a prediction backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend refused the request at submission or during processing.
    #[error("backend rejected request: {0}")]
    Rejected(String),

    /// The backend dropped the request without ever resolving it.
    #[error("backend dropped request before responding")]
    Dropped,

    /// The configured await bound elapsed before the response arrived.
    #[error("timed out after {0:?} waiting for response")]
    TimedOut(Duration),
}

/// Errors surfaced by a benchmark round.
#[derive(Error, Debug)]
pub enum BenchError {
    /// A round must issue at least one request; zero would divide by zero
    /// in the throughput and mean computations.
    #[error("invalid request count: {0} (must be >= 1)")]
    InvalidRequestCount(usize),

    /// A request failed; the round is aborted with no partial report.
    #[error("benchmark round aborted: {0}")]
    Backend(#[from] BackendError),
}
