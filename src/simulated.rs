//! Simulated prediction backend for standalone runs and tests.
//!
//! Each submission spawns its own task that sleeps for a sampled service
//! latency and then fulfills the pending response. The reported
//! `duration_micros` is the sampled latency, the backend's own service
//! measurement, so fixed-latency configurations produce exact figures.

use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::backend::{PendingResponse, PredictionBackend};
use crate::config::SimulatedBackendConfig;
use crate::error::BackendError;
use crate::query::{Query, Response};

/// In-process backend that fabricates responses with configurable latency,
/// jitter, and error rate.
pub struct SimulatedBackend {
    config: SimulatedBackendConfig,
    ready: AtomicBool,
}

impl SimulatedBackend {
    pub fn new(config: SimulatedBackendConfig) -> Self {
        Self {
            config,
            ready: AtomicBool::new(false),
        }
    }

    /// Lifecycle call: the backend accepts submissions only after this
    /// completes. Must be invoked before benchmarking begins.
    pub async fn ready(&self) -> anyhow::Result<()> {
        self.config.validate()?;
        self.ready.store(true, Ordering::Release);
        tracing::info!("simulated backend ready");
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}

impl PredictionBackend for SimulatedBackend {
    fn submit(&self, _query: Query) -> PendingResponse {
        let (tx, pending) = PendingResponse::channel();

        if !self.is_ready() {
            let _ = tx.send(Err(BackendError::Rejected(
                "backend not ready".to_string(),
            )));
            return pending;
        }

        // Sample latency and error outcome up front so the spawned task
        // needs no generator of its own.
        let mut rng = rand::thread_rng();
        let jitter = if self.config.jitter_micros > 0 {
            rng.gen_range(0..=self.config.jitter_micros)
        } else {
            0
        };
        let service_micros = self.config.service_micros + jitter;
        let rejected = self.config.error_rate > 0.0 && rng.gen::<f64>() < self.config.error_rate;
        let output = self.config.output_value;

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_micros(service_micros)).await;

            let result = if rejected {
                Err(BackendError::Rejected("simulated failure".to_string()))
            } else {
                Ok(Response {
                    duration_micros: service_micros,
                    output,
                })
            };
            let _ = tx.send(result);
        });

        pending
    }
}
