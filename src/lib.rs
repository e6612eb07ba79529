// predbench - Library root

pub mod backend;
pub mod config;
pub mod driver;
pub mod error;
pub mod query;
pub mod report;
pub mod runner;
pub mod simulated;
pub mod stats;

pub use backend::{PendingResponse, PredictionBackend};
pub use config::{BenchConfig, SimulatedBackendConfig};
pub use error::{BackendError, BenchError};
pub use query::{Query, Response};
pub use report::RoundReport;
pub use runner::{BenchmarkRunner, RoundMetrics};
pub use simulated::SimulatedBackend;
