//! End-to-end tests: driver loop over the simulated backend.

use std::sync::Arc;

use predbench::{
    driver, BenchConfig, BenchmarkRunner, RoundReport, SimulatedBackend, SimulatedBackendConfig,
};

fn config() -> BenchConfig {
    BenchConfig {
        payload_len: 32,
        warmup_secs: 0,
        await_timeout_secs: Some(10),
    }
}

async fn ready_backend(backend_config: SimulatedBackendConfig) -> Arc<SimulatedBackend> {
    let backend = Arc::new(SimulatedBackend::new(backend_config));
    backend.ready().await.unwrap();
    backend
}

#[tokio::test]
async fn driver_runs_rounds_and_skips_bad_lines() {
    let backend = ready_backend(SimulatedBackendConfig {
        service_micros: 100,
        jitter_micros: 50,
        error_rate: 0.0,
        output_value: 1.0,
    })
    .await;
    let runner = BenchmarkRunner::new(backend, config());

    // Two valid rounds among malformed lines, a blank, and a zero.
    let input: &[u8] = b"10\nnot-a-number\n\n0\n25\n";
    let rounds = driver::run(&runner, &config(), input, false).await.unwrap();
    assert_eq!(rounds, 2);
}

#[tokio::test]
async fn round_figures_match_fixed_backend() {
    let backend = ready_backend(SimulatedBackendConfig {
        service_micros: 100,
        jitter_micros: 0,
        error_rate: 0.0,
        output_value: 1.0,
    })
    .await;
    let runner = BenchmarkRunner::new(backend, config());

    let metrics = runner.run_round(10).await.unwrap();
    assert_eq!(metrics.num_requests, 10);
    assert!((metrics.mean_latency_micros - 100.0).abs() < f64::EPSILON);
    assert!((metrics.p99_latency_micros - 100.0).abs() < f64::EPSILON);
    assert!((metrics.mean_output - 1.0).abs() < f64::EPSILON);
    assert!((metrics.throughput - 10.0 / metrics.elapsed_secs).abs() < 1e-9 * metrics.throughput);

    let report = RoundReport::from_metrics(&metrics);
    assert!(report.render_text().contains("Sent 10 requests"));

    let parsed: RoundReport = serde_json::from_str(&report.to_json()).unwrap();
    assert_eq!(parsed.num_requests, 10);
}

#[tokio::test]
async fn failing_backend_aborts_without_partial_report() {
    let backend = ready_backend(SimulatedBackendConfig {
        service_micros: 10,
        jitter_micros: 0,
        error_rate: 1.0,
        output_value: 1.0,
    })
    .await;
    let runner = BenchmarkRunner::new(backend, config());

    assert!(runner.run_round(5).await.is_err());
}
