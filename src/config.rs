//! Configuration structs for benchmark rounds and the simulated backend.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for benchmark rounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Feature-vector length of every generated query.
    pub payload_len: usize,
    /// Grace period after backend readiness before the first prompt, in
    /// seconds, to let the backend warm up internally.
    pub warmup_secs: u64,
    /// Bound on each response await, in seconds. `None` waits indefinitely,
    /// so a hung backend hangs the round.
    pub await_timeout_secs: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            payload_len: 1000,
            warmup_secs: 3,
            await_timeout_secs: None,
        }
    }
}

impl BenchConfig {
    /// Validate the configuration before any round runs.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.payload_len == 0 {
            anyhow::bail!("payload_len must be >= 1");
        }
        if self.await_timeout_secs == Some(0) {
            anyhow::bail!("await_timeout_secs must be >= 1 when set");
        }
        Ok(())
    }

    /// Await bound as a `Duration`, if one is configured.
    pub fn await_timeout(&self) -> Option<Duration> {
        self.await_timeout_secs.map(Duration::from_secs)
    }
}

/// Configuration for the simulated prediction backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatedBackendConfig {
    /// Base service latency reported (and slept) per request, in
    /// microseconds.
    pub service_micros: u64,
    /// Uniform jitter added to the base latency, in microseconds.
    pub jitter_micros: u64,
    /// Fraction of requests rejected with an error (0.0 to 1.0).
    pub error_rate: f64,
    /// Scalar output value attached to every response.
    pub output_value: f64,
}

impl Default for SimulatedBackendConfig {
    fn default() -> Self {
        Self {
            service_micros: 500,
            jitter_micros: 200,
            error_rate: 0.0,
            output_value: 1.0,
        }
    }
}

impl SimulatedBackendConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.error_rate) {
            anyhow::bail!("error_rate must be within [0.0, 1.0]");
        }
        Ok(())
    }
}
