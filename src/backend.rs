//! The backend submission seam: a non-blocking submit call returning a
//! one-shot handle to the eventual response.

use std::time::Duration;
use tokio::sync::oneshot;

use crate::error::BackendError;
use crate::query::{Query, Response};

/// A prediction-serving backend under test.
///
/// `submit` never blocks the caller; the returned handle resolves exactly
/// once, with either a response or an error. Request processing happens on
/// backend-owned tasks invisible to the harness.
pub trait PredictionBackend: Send + Sync {
    fn submit(&self, query: Query) -> PendingResponse;
}

/// Handle to one in-flight request, held in submission order by the runner.
pub struct PendingResponse {
    rx: oneshot::Receiver<Result<Response, BackendError>>,
}

impl PendingResponse {
    /// Create the (sender, handle) pair for one request. The backend keeps
    /// the sender and fulfills it exactly once.
    pub fn channel() -> (oneshot::Sender<Result<Response, BackendError>>, Self) {
        let (tx, rx) = oneshot::channel();
        (tx, Self { rx })
    }

    /// Block the calling task until the response arrives.
    ///
    /// `timeout` bounds the wait; `None` waits indefinitely. A sender
    /// dropped without fulfilling the request surfaces as
    /// [`BackendError::Dropped`].
    pub async fn resolve(self, timeout: Option<Duration>) -> Result<Response, BackendError> {
        match timeout {
            Some(bound) => match tokio::time::timeout(bound, self.rx).await {
                Ok(Ok(result)) => result,
                Ok(Err(_)) => Err(BackendError::Dropped),
                Err(_) => Err(BackendError::TimedOut(bound)),
            },
            None => match self.rx.await {
                Ok(result) => result,
                Err(_) => Err(BackendError::Dropped),
            },
        }
    }
}
