//! Rendering of simulation results for stdout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::config::SimulationConfig;
use crate::core::range::TrialResult;

/// Results of one run plus what is needed to reproduce it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub started_at: DateTime<Utc>,
    pub seed: u64,
    pub config: SimulationConfig,
    pub trials: Vec<TrialResult>,
}

impl SimulationReport {
    /// Sum of every trial's elapsed time
    #[must_use]
    pub fn total_seconds(&self) -> f64 {
        self.trials.iter().map(|t| t.elapsed_seconds).sum()
    }
}

/// Format seconds like Python's float repr: shortest round-trip digits, a
/// fractional part on integral values, and a signed exponent of at least two
/// digits (`1.2e-05`, `1e+16`).
#[must_use]
pub fn format_seconds(seconds: f64) -> String {
    let repr = format!("{seconds:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

/// Render trials as a list of `(length, seconds)` tuples, e.g. `[(500, 0.25), (13, 0.0)]`
#[must_use]
pub fn format_text(trials: &[TrialResult]) -> String {
    let pairs: Vec<String> = trials
        .iter()
        .map(|t| format!("({}, {})", t.range_length, format_seconds(t.elapsed_seconds)))
        .collect();
    format!("[{}]", pairs.join(", "))
}

#[must_use]
pub fn format_tsv(trials: &[TrialResult]) -> String {
    let rows: String = trials
        .iter()
        .map(|t| format!("{}\t{}\n", t.range_length, format_seconds(t.elapsed_seconds)))
        .collect();
    format!("range_length\telapsed_seconds\n{rows}")
}

/// # Errors
///
/// Returns an error if the report cannot be serialized.
pub fn format_json(report: &SimulationReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
