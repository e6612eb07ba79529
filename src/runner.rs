//! Benchmark runner: concurrent dispatch, ordered collection, and metrics
//! derivation for one round.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::query::generate_query;
use crate::stats;
use crate::PredictionBackend;

/// Derived figures for one completed round. Rendering lives in
/// [`crate::report`]; nothing here touches stdout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundMetrics {
    pub num_requests: usize,
    pub elapsed_secs: f64,
    pub throughput: f64,
    pub p99_latency_micros: f64,
    pub mean_latency_micros: f64,
    pub mean_output: f64,
}

/// Runs benchmark rounds against a shared backend handle. Holds no state
/// across rounds beyond the handle and configuration.
pub struct BenchmarkRunner {
    backend: Arc<dyn PredictionBackend>,
    config: BenchConfig,
}

impl BenchmarkRunner {
    pub fn new(backend: Arc<dyn PredictionBackend>, config: BenchConfig) -> Self {
        Self { backend, config }
    }

    /// Run one round: issue `num_requests` submissions without waiting
    /// between them, then await every pending response in submission order.
    ///
    /// All requests are in flight at the backend before the first await, so
    /// the round measures behavior under full concurrent load rather than
    /// lockstep issue-and-wait. Latencies are the backend's self-reported
    /// service times, collected in submission order (order does not affect
    /// the statistics). The first failed response aborts the round with no
    /// partial metrics.
    pub async fn run_round(&self, num_requests: usize) -> Result<RoundMetrics, BenchError> {
        if num_requests < 1 {
            return Err(BenchError::InvalidRequestCount(num_requests));
        }

        tracing::info!(num_requests, "starting benchmark round");

        // One generator per round, owned exclusively by this control task.
        let mut rng = StdRng::from_entropy();
        let start = Instant::now();

        let mut pending = Vec::with_capacity(num_requests);
        for _ in 0..num_requests {
            let query = generate_query(self.config.payload_len, &mut rng);
            pending.push(self.backend.submit(query));
        }

        let timeout = self.config.await_timeout();
        let mut samples = Vec::with_capacity(num_requests);
        let mut output_sum = 0.0;

        for response in pending {
            let response = response.resolve(timeout).await?;
            samples.push(response.duration_micros);
            output_sum += response.output;
        }

        let elapsed_secs = start.elapsed().as_secs_f64();
        let metrics = RoundMetrics {
            num_requests,
            elapsed_secs,
            throughput: num_requests as f64 / elapsed_secs,
            p99_latency_micros: stats::percentile(&mut samples, 0.99),
            mean_latency_micros: stats::mean(&samples),
            mean_output: output_sum / num_requests as f64,
        };

        tracing::info!(
            throughput = metrics.throughput,
            p99_micros = metrics.p99_latency_micros,
            "benchmark round complete"
        );

        Ok(metrics)
    }
}
