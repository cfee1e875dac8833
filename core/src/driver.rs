//! Orchestration of a single reconstruction: decode, build, solve, report,
//! verify.

use math::prelude::Polynomial;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    case::TestCase,
    error::{RecoveryError, RecoveryResult},
    params::RecoveryConfig,
    system::build_system,
    verify::wrong_points,
};

/// What a successful case reports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseOutcome {
    /// Constant term of the reconstructed polynomial, rounded.
    pub secret: i64,
    /// Inconsistent 1-based point indices; `None` when `n == k` and there
    /// was nothing to verify.
    pub wrong_points: Option<Vec<usize>>,
}

/// Runs cases with a fixed set of tolerances.
#[derive(Clone, Copy, Debug, Default)]
pub struct Recovery {
    config: RecoveryConfig,
}

impl Recovery {
    pub fn new(config: RecoveryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RecoveryConfig {
        &self.config
    }

    /// Solve for the polynomial through the first `k` points of `case`.
    pub fn reconstruct(&self, case: &TestCase) -> RecoveryResult<Polynomial<f64>> {
        case.validate()?;
        let system = build_system(case.reconstruction_points())?;
        system.solve(self.config.elimination_tolerance)
    }

    /// Reconstruct, extract the secret and verify any extra points.
    pub fn run_case(&self, case: &TestCase) -> RecoveryResult<CaseOutcome> {
        let poly = self.reconstruct(case)?;
        let constant = poly.constant_term();
        let secret = round_secret(constant)
            .ok_or(RecoveryError::SecretOutOfRange { constant })?;

        let wrong_points = if case.has_extra_points() {
            Some(wrong_points(case, &poly, self.config.match_tolerance)?)
        } else {
            None
        };

        info!(
            k = case.k(),
            n = case.n(),
            secret,
            ?wrong_points,
            "case solved"
        );
        Ok(CaseOutcome {
            secret,
            wrong_points,
        })
    }

    /// Run every case independently; a failure is recorded in its slot and
    /// does not stop the following cases.
    pub fn run_batch<'a, I>(&self, cases: I) -> Vec<RecoveryResult<CaseOutcome>>
    where
        I: IntoIterator<Item = &'a TestCase>,
    {
        cases
            .into_iter()
            .enumerate()
            .map(|(idx, case)| {
                let outcome = self.run_case(case);
                if let Err(err) = &outcome {
                    warn!(case = idx + 1, %err, "case failed");
                }
                outcome
            })
            .collect()
    }
}

/// [`Recovery::run_case`] with the default tolerances.
pub fn run_case(case: &TestCase) -> RecoveryResult<CaseOutcome> {
    Recovery::default().run_case(case)
}

/// [`Recovery::run_batch`] with the default tolerances.
pub fn run_batch<'a, I>(cases: I) -> Vec<RecoveryResult<CaseOutcome>>
where
    I: IntoIterator<Item = &'a TestCase>,
{
    Recovery::default().run_batch(cases)
}

/// Round to the nearest integer with halves going towards positive infinity.
/// `None` for NaN, infinities and values outside the `i64` range.
fn round_secret(constant: f64) -> Option<i64> {
    let floor = constant.floor();
    let rounded = if constant - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    // i64::MAX as f64 is 2^63, one past the largest representable value
    let in_range = rounded >= i64::MIN as f64 && rounded < i64::MAX as f64;
    in_range.then_some(rounded as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::MalformedInput, point::SamplePoint};

    fn decimal_points(values: &[u64]) -> Vec<SamplePoint> {
        values
            .iter()
            .map(|v| SamplePoint::new(10, v.to_string()))
            .collect()
    }

    #[test]
    fn secret_of_parabola_through_squares_is_zero() {
        let case = TestCase::new(3, 3, decimal_points(&[1, 4, 9]));
        let outcome = run_case(&case).unwrap();
        assert_eq!(outcome.secret, 0);
        assert_eq!(outcome.wrong_points, None);
    }

    #[test]
    fn extra_points_are_verified() {
        let consistent = TestCase::new(3, 4, decimal_points(&[1, 4, 9, 16]));
        assert_eq!(
            run_case(&consistent).unwrap(),
            CaseOutcome {
                secret: 0,
                wrong_points: Some(vec![])
            }
        );

        let mutated = TestCase::new(3, 5, decimal_points(&[1, 4, 9, 16, 26]));
        assert_eq!(
            run_case(&mutated).unwrap(),
            CaseOutcome {
                secret: 0,
                wrong_points: Some(vec![5])
            }
        );
    }

    #[test]
    fn mixed_bases_decode_before_solving() {
        // 3x^2 - 2x + 5 sampled at 1, 2, 3, 4
        let case = TestCase::new(
            3,
            4,
            vec![
                SamplePoint::new(2, "110"),
                SamplePoint::new(16, "D"),
                SamplePoint::new(8, "32"),
                SamplePoint::new(36, "19"),
            ],
        );
        assert_eq!(
            run_case(&case).unwrap(),
            CaseOutcome {
                secret: 5,
                wrong_points: Some(vec![])
            }
        );
    }

    #[test]
    fn reconstruct_exposes_coefficients() {
        let case = TestCase::new(2, 2, decimal_points(&[5, 7]));
        let poly = Recovery::default().reconstruct(&case).unwrap();
        let expected = [2.0, 3.0];
        for (got, want) in poly.coefficients().iter().zip(expected) {
            assert!((got - want).abs() < 1e-9);
        }
    }

    #[test]
    fn negative_secret_is_rounded_to_nearest() {
        // 4x - 3
        let case = TestCase::new(2, 2, decimal_points(&[1, 5]));
        assert_eq!(run_case(&case).unwrap().secret, -3);
        assert_eq!(round_secret(-1.4), Some(-1));
        assert_eq!(round_secret(-1.6), Some(-2));
        assert_eq!(round_secret(4.999_999_9), Some(5));
    }

    #[test]
    fn halves_round_towards_positive_infinity() {
        assert_eq!(round_secret(2.5), Some(3));
        assert_eq!(round_secret(-2.5), Some(-2));
        assert_eq!(round_secret(-0.5), Some(0));
    }

    #[test]
    fn unrepresentable_constants_have_no_secret() {
        assert_eq!(round_secret(f64::NAN), None);
        assert_eq!(round_secret(f64::INFINITY), None);
        assert_eq!(round_secret(f64::NEG_INFINITY), None);
        assert_eq!(round_secret(1e19), None);
        assert_eq!(round_secret(-1e19), None);
        assert_eq!(round_secret(-9.0e18), Some(-9_000_000_000_000_000_000));
    }

    #[test]
    fn overflowing_elimination_is_not_reported_as_a_secret() {
        // 3.4e308 for the constant term overflows to infinity during back
        // substitution even though both samples are finite
        let near_max = format!("17{}", "0".repeat(307));
        let case = TestCase::new(
            2,
            2,
            vec![SamplePoint::new(10, near_max), SamplePoint::new(10, "0")],
        );
        assert!(matches!(
            run_case(&case),
            Err(RecoveryError::SecretOutOfRange { constant })
                if constant == f64::INFINITY
        ));
    }

    #[test]
    fn value_beyond_f64_range_fails_the_case() {
        let case = TestCase::new(
            2,
            2,
            vec![
                SamplePoint::new(10, "1"),
                SamplePoint::new(36, "Z".repeat(300)),
            ],
        );
        assert_eq!(
            run_case(&case).unwrap_err(),
            RecoveryError::MalformedInput(MalformedInput::ValueOutOfRange {
                point: 2
            })
        );
    }

    #[test]
    fn malformed_case_is_rejected_before_solving() {
        let case = TestCase::new(4, 3, decimal_points(&[1, 2, 3]));
        assert_eq!(
            run_case(&case).unwrap_err(),
            RecoveryError::MalformedInput(MalformedInput::ThresholdExceedsPoints {
                k: 4,
                n: 3
            })
        );
    }

    #[test]
    fn large_elimination_tolerance_reports_singular_matrix() {
        let case = TestCase::new(2, 2, decimal_points(&[1, 2]));
        let recovery = Recovery::new(
            RecoveryConfig::default().with_elimination_tolerance(10.0),
        );
        assert!(matches!(
            recovery.run_case(&case),
            Err(RecoveryError::SingularMatrix { column: 0, .. })
        ));
    }

    #[test]
    fn batch_isolates_failures() {
        let cases = vec![
            TestCase::new(3, 3, decimal_points(&[1, 4, 9])),
            TestCase::new(
                2,
                2,
                vec![SamplePoint::new(2, "3"), SamplePoint::new(10, "1")],
            ),
            TestCase::new(1, 2, decimal_points(&[7, 8])),
        ];
        let results = run_batch(&cases);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().secret, 0);
        assert!(matches!(
            results[1],
            Err(RecoveryError::InvalidDigit { point: 1, .. })
        ));
        assert_eq!(
            results[2].as_ref().unwrap(),
            &CaseOutcome {
                secret: 7,
                wrong_points: Some(vec![2])
            }
        );
    }

    #[test]
    fn custom_match_tolerance_is_honoured() {
        let case = TestCase::new(1, 2, decimal_points(&[7, 8]));
        let loose =
            Recovery::new(RecoveryConfig::default().with_match_tolerance(2.0));
        assert_eq!(loose.config().match_tolerance, 2.0);
        assert_eq!(loose.run_case(&case).unwrap().wrong_points, Some(vec![]));
    }
}
