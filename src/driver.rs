//! Interactive driver: warm-up grace period, then a prompt loop reading
//! request counts from a line-oriented input stream.

use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::config::BenchConfig;
use crate::runner::BenchmarkRunner;
use crate::RoundReport;

const PROMPT: &str = "Please enter number of requests to make:";

/// Run the prompt loop until the input stream is exhausted.
///
/// Assumes the backend handle inside `runner` is already initialized; waits
/// the configured warm-up grace period before the first prompt. Lines that
/// do not parse as an integer >= 1 are silently discarded and re-prompted.
/// A backend failure propagates and aborts the loop. Returns the number of
/// completed rounds.
pub async fn run<R>(runner: &BenchmarkRunner, config: &BenchConfig, input: R, json: bool) -> anyhow::Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    if config.warmup_secs > 0 {
        tracing::info!(secs = config.warmup_secs, "waiting for backend warm-up");
        tokio::time::sleep(Duration::from_secs(config.warmup_secs)).await;
    }

    let mut rounds = 0;
    let mut lines = input.lines();

    println!("{}", PROMPT);
    while let Some(line) = lines.next_line().await? {
        // Zero is an input error here, not a runner error: it would divide
        // by zero downstream, so it is discarded like any unparseable line.
        match line.trim().parse::<usize>() {
            Ok(num_requests) if num_requests >= 1 => {
                println!("Running benchmark...");
                let metrics = runner.run_round(num_requests).await?;
                RoundReport::from_metrics(&metrics).print(json);
                println!();
                rounds += 1;
            }
            _ => {}
        }
        println!("{}", PROMPT);
    }

    tracing::info!(rounds, "input exhausted, driver exiting");
    Ok(rounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulatedBackendConfig;
    use crate::simulated::SimulatedBackend;
    use std::sync::Arc;

    fn test_config() -> BenchConfig {
        BenchConfig {
            payload_len: 8,
            warmup_secs: 0,
            await_timeout_secs: None,
        }
    }

    async fn test_runner(error_rate: f64) -> BenchmarkRunner {
        let backend = Arc::new(SimulatedBackend::new(SimulatedBackendConfig {
            service_micros: 10,
            jitter_micros: 0,
            error_rate,
            output_value: 1.0,
        }));
        backend.ready().await.unwrap();
        BenchmarkRunner::new(backend, test_config())
    }

    #[tokio::test]
    async fn test_one_round_per_valid_line() {
        let runner = test_runner(0.0).await;
        let input: &[u8] = b"3\n5\n";

        let rounds = run(&runner, &test_config(), input, false).await.unwrap();
        assert_eq!(rounds, 2);
    }

    #[tokio::test]
    async fn test_malformed_and_zero_lines_ignored() {
        let runner = test_runner(0.0).await;
        let input: &[u8] = b"abc\n\n0\n-4\n2\n";

        let rounds = run(&runner, &test_config(), input, false).await.unwrap();
        assert_eq!(rounds, 1);
    }

    #[tokio::test]
    async fn test_end_of_input_terminates_normally() {
        let runner = test_runner(0.0).await;
        let input: &[u8] = b"";

        let rounds = run(&runner, &test_config(), input, false).await.unwrap();
        assert_eq!(rounds, 0);
    }

    #[tokio::test]
    async fn test_backend_failure_aborts_loop() {
        let runner = test_runner(1.0).await;
        let input: &[u8] = b"4\n2\n";

        assert!(run(&runner, &test_config(), input, false).await.is_err());
    }
}
