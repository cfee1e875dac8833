use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    error::{MalformedInput, RecoveryResult},
    params::validate_case_config,
    point::SamplePoint,
};

/// `n` points supplied, `k` of them needed to fix the polynomial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keys {
    pub n: usize,
    pub k: usize,
}

/// One reconstruction problem as read from an input record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub keys: Keys,
    pub points: Vec<SamplePoint>,
}

impl TestCase {
    pub fn new(k: usize, n: usize, points: Vec<SamplePoint>) -> Self {
        Self {
            keys: Keys { n, k },
            points,
        }
    }

    /// Minimum number of points, also the number of coefficients.
    pub fn k(&self) -> usize {
        self.keys.k
    }

    /// Number of points that take part in verification.
    pub fn n(&self) -> usize {
        self.keys.n
    }

    /// Whether points beyond the first `k` were supplied.
    pub fn has_extra_points(&self) -> bool {
        self.keys.n > self.keys.k
    }

    /// Check `1 <= k <= n <= points.len()`.
    pub fn validate(&self) -> RecoveryResult<()> {
        validate_case_config(self.k(), self.n())?;
        if self.points.len() < self.n() {
            return Err(MalformedInput::MissingPoints {
                expected: self.n(),
                found: self.points.len(),
            }
            .into());
        }
        if self.points.len() > self.n() {
            warn!(
                n = self.n(),
                supplied = self.points.len(),
                "ignoring points beyond n"
            );
        }
        Ok(())
    }

    /// The first `k` points, used to build the linear system.
    ///
    /// Panics if the case has fewer than `k` points; call [`Self::validate`]
    /// first.
    pub fn reconstruction_points(&self) -> &[SamplePoint] {
        &self.points[..self.k()]
    }

    /// The first `n` points, all checked against the reconstructed curve.
    ///
    /// Panics if the case has fewer than `n` points; call [`Self::validate`]
    /// first.
    pub fn verification_points(&self) -> &[SamplePoint] {
        &self.points[..self.n()]
    }
}
