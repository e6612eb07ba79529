//! predbench CLI
//!
//! Starts the simulated prediction backend, waits for readiness, then runs
//! the interactive prompt loop: one benchmark round per request count read
//! from stdin, terminating on end-of-input.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;

use predbench::{BenchConfig, BenchmarkRunner, SimulatedBackend, SimulatedBackendConfig};

#[derive(Parser)]
#[command(name = "predbench")]
#[command(about = "Load-generation and latency-measurement harness for prediction backends")]
struct Cli {
    /// Feature-vector length of every generated query
    #[arg(short = 'l', long, env = "PREDBENCH_PAYLOAD_LEN", default_value = "1000")]
    payload_len: usize,

    /// Warm-up grace period after backend readiness, in seconds
    #[arg(short = 'w', long, env = "PREDBENCH_WARMUP_SECS", default_value = "3")]
    warmup: u64,

    /// Bound on each response await in seconds (unbounded when omitted)
    #[arg(short = 't', long)]
    timeout: Option<u64>,

    /// Simulated backend service latency in microseconds
    #[arg(long, default_value = "500")]
    service_micros: u64,

    /// Simulated backend latency jitter in microseconds
    #[arg(long, default_value = "200")]
    jitter_micros: u64,

    /// Simulated backend error rate (0.0 to 1.0)
    #[arg(long, default_value = "0.0")]
    error_rate: f64,

    /// Scalar output value every simulated response carries
    #[arg(long, default_value = "1.0")]
    output_value: f64,

    /// Print reports as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let config = BenchConfig {
        payload_len: cli.payload_len,
        warmup_secs: cli.warmup,
        await_timeout_secs: cli.timeout,
    };
    config.validate()?;

    let backend_config = SimulatedBackendConfig {
        service_micros: cli.service_micros,
        jitter_micros: cli.jitter_micros,
        error_rate: cli.error_rate,
        output_value: cli.output_value,
    };
    backend_config.validate()?;

    let backend = Arc::new(SimulatedBackend::new(backend_config));
    backend.ready().await?;

    let runner = BenchmarkRunner::new(backend, config.clone());
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    predbench::driver::run(&runner, &config, stdin, cli.json).await?;

    Ok(())
}
