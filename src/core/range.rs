use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::SimulationConfig;

/// Half-open query interval `[first, last)` on the reference sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryRange {
    pub first: u64,
    pub last: u64,
}

impl QueryRange {
    #[must_use]
    pub fn new(first: u64, last: u64) -> Self {
        debug_assert!(first < last, "empty query range {first}..{last}");
        Self { first, last }
    }

    #[must_use]
    pub fn len(&self) -> u64 {
        self.last - self.first
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first >= self.last
    }
}

impl std::fmt::Display for QueryRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}

/// Timing of one trial: range length and the elapsed seconds summed over all targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    pub range_length: u64,
    pub elapsed_seconds: f64,
}

/// Draw `config.reps` ranges whose sizes are uniform over `[1, ref_length]`
/// and whose starts are uniform over the positions where that size still fits.
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub fn generate_uniform_ranges<R: Rng + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Vec<QueryRange> {
    let ref_length = config.ref_length as f64;

    (0..config.reps)
        .map(|_| {
            let size = rng.gen_range(1.0..=ref_length);
            let start = rng.gen_range(0.0..=ref_length - size);
            let first = start.floor() as u64;
            // rounding in start + size can overshoot by an ulp
            let last = ((start + size).floor() as u64).min(config.ref_length);
            QueryRange::new(first, last.max(first + 1))
        })
        .collect()
}
