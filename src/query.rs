//! Query and response envelopes, plus synthetic query generation.

use rand::Rng;

/// Latency budget attached to every generated query, in microseconds.
pub const SLO_MICROS: u64 = 20_000;

/// A prediction request. Immutable once built; owned by the caller until
/// handed to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Application label identifying the benchmark workload.
    pub label: String,
    /// Number of output classes the backend should score against.
    pub num_classes: u32,
    /// Feature vector, fixed length per round.
    pub payload: Vec<f64>,
    /// Latency budget in microseconds. Attached, not enforced here.
    pub latency_budget_micros: u64,
    /// Model-selection policy the backend should apply.
    pub selection_policy: String,
    /// Candidate (model name, version) pairs, in preference order.
    pub candidate_models: Vec<(String, u32)>,
}

/// A resolved prediction. `duration_micros` is the backend's own service
/// latency measurement, not the harness wall clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Response {
    pub duration_micros: u64,
    pub output: f64,
}

/// Generate one synthetic query: a payload of `payload_len` values drawn
/// uniformly from `[0.0, 1.0)`, wrapped with fixed routing metadata.
///
/// The generator is mutated per draw. A single generator instance is not
/// safe for concurrent draws; give each concurrent caller its own seeded
/// generator instead of sharing one.
pub fn generate_query<R: Rng>(payload_len: usize, rng: &mut R) -> Query {
    let payload: Vec<f64> = (0..payload_len).map(|_| rng.gen_range(0.0..1.0)).collect();

    Query {
        label: "bench".to_string(),
        num_classes: 3,
        payload,
        latency_budget_micros: SLO_MICROS,
        selection_policy: "simple_policy".to_string(),
        candidate_models: vec![("m".to_string(), 1), ("j".to_string(), 1)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_payload_length_and_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let query = generate_query(1000, &mut rng);

        assert_eq!(query.payload.len(), 1000);
        assert!(query.payload.iter().all(|&v| (0.0..1.0).contains(&v)));
    }

    #[test]
    fn test_fixed_routing_metadata() {
        let mut rng = StdRng::seed_from_u64(7);
        let query = generate_query(4, &mut rng);

        assert_eq!(query.label, "bench");
        assert_eq!(query.num_classes, 3);
        assert_eq!(query.latency_budget_micros, SLO_MICROS);
        assert_eq!(query.selection_policy, "simple_policy");
        assert_eq!(
            query.candidate_models,
            vec![("m".to_string(), 1), ("j".to_string(), 1)]
        );
    }

    #[test]
    fn test_generator_advances_between_queries() {
        let mut rng = StdRng::seed_from_u64(7);
        let first = generate_query(8, &mut rng);
        let second = generate_query(8, &mut rng);
        assert_ne!(first.payload, second.payload);
    }
}
