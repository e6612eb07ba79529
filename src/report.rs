//! Report rendering for completed rounds, kept apart from the computation
//! so output formats can change without touching the runner.

use serde::{Deserialize, Serialize};

use crate::runner::RoundMetrics;

/// Printable report for one round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundReport {
    pub num_requests: usize,
    pub elapsed_secs: f64,
    pub throughput: f64,
    pub p99_latency_micros: f64,
    pub mean_latency_micros: f64,
    pub mean_output: f64,
}

impl RoundReport {
    pub fn from_metrics(metrics: &RoundMetrics) -> Self {
        Self {
            num_requests: metrics.num_requests,
            elapsed_secs: metrics.elapsed_secs,
            throughput: metrics.throughput,
            p99_latency_micros: metrics.p99_latency_micros,
            mean_latency_micros: metrics.mean_latency_micros,
            mean_output: metrics.mean_output,
        }
    }

    /// Render the human-readable terminal report.
    pub fn render_text(&self) -> String {
        format!(
            "Sent {} requests in {:.4} seconds\n\
             Throughput: {:.2} req/s\n\
             p99 latency (us): {:.2}, mean latency (us): {:.2}\n\
             Mean output value: {:.4}",
            self.num_requests,
            self.elapsed_secs,
            self.throughput,
            self.p99_latency_micros,
            self.mean_latency_micros,
            self.mean_output
        )
    }

    /// Export the report as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Print the report in the requested mode.
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", self.to_json());
        } else {
            println!("{}", self.render_text());
        }
    }
}
