//! Latency statistics: arithmetic mean and interpolated percentile estimation.
//!
//! The percentile estimator is the weighted-average method (linear
//! interpolation between order statistics), clamped to the first and last
//! order statistic at the two ends of the sample range. Outputs must match
//! the reference figures exactly on identical inputs, so the estimator works
//! on the raw samples rather than a histogram approximation.

/// Arithmetic mean of a sample sequence.
///
/// Undefined (NaN) on an empty slice; callers guard by construction since a
/// round always issues at least one request.
pub fn mean(samples: &[u64]) -> f64 {
    let sum: f64 = samples.iter().map(|&s| s as f64).sum();
    sum / samples.len() as f64
}

/// Interpolated percentile of a sample sequence, `p` in `[0.0, 1.0]`.
///
/// Sorts `samples` in place; callers needing the original order must pass a
/// copy.
///
/// # Panics
///
/// Panics if `samples` is empty or `p` is outside `[0.0, 1.0]`.
pub fn percentile(samples: &mut [u64], p: f64) -> f64 {
    assert!((0.0..=1.0).contains(&p), "percentile out of range: {}", p);
    samples.sort_unstable();

    let n = samples.len() as f64;
    // Rank of the order statistic to estimate, clamped to [1, n].
    let x = if p <= 1.0 / (n + 1.0) {
        1.0
    } else if p < n / (n + 1.0) {
        p * (n + 1.0)
    } else {
        n
    };

    let idx = x.floor() as usize - 1;
    let mut value = samples[idx] as f64;
    let remainder = x.fract();
    if remainder != 0.0 {
        value += remainder * (samples[idx + 1] as f64 - samples[idx] as f64);
    }
    value
}
