use serde::{Deserialize, Serialize};

use crate::error::{MalformedInput, RecoveryResult};

pub use math::constants::ELIMINATION_TOLERANCE;

/// A sample is consistent with the curve when its observed value is within
/// this distance of the predicted one.
pub const MATCH_TOLERANCE: f64 = 1e-6;

/// Numeric thresholds used while reconstructing and verifying a case.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecoveryConfig {
    /// Pivots below this magnitude make the system singular.
    pub elimination_tolerance: f64,
    /// Maximum deviation (exclusive) for a point to count as on the curve.
    pub match_tolerance: f64,
}

impl RecoveryConfig {
    pub const fn new(elimination_tolerance: f64, match_tolerance: f64) -> Self {
        Self {
            elimination_tolerance,
            match_tolerance,
        }
    }

    pub fn with_elimination_tolerance(mut self, tolerance: f64) -> Self {
        self.elimination_tolerance = tolerance;
        self
    }

    pub fn with_match_tolerance(mut self, tolerance: f64) -> Self {
        self.match_tolerance = tolerance;
        self
    }
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self::new(ELIMINATION_TOLERANCE, MATCH_TOLERANCE)
    }
}

/// Check the `k`-of-`n` shape of a case: `1 <= k <= n`.
pub fn validate_case_config(k: usize, n: usize) -> RecoveryResult<()> {
    if k == 0 {
        return Err(MalformedInput::ZeroThreshold.into());
    }
    if k > n {
        return Err(MalformedInput::ThresholdExceedsPoints { k, n }.into());
    }
    Ok(())
}
