use math::prelude::{Polynomial, RadixError};
use tracing::debug;

use crate::{
    case::TestCase,
    error::{RecoveryError, RecoveryResult},
    system::abscissa,
    traits::PointSource,
};

/// Whether `point`, sampled at `x`, lies on `poly`.
///
/// A NaN deviation never counts as a match.
pub fn is_point_on_curve<P: PointSource>(
    point: &P,
    x: f64,
    poly: &Polynomial<f64>,
    tolerance: f64,
) -> Result<bool, RadixError> {
    let observed = point.decode()?;
    let predicted = poly.evaluate(x);
    Ok((observed - predicted).abs() < tolerance)
}

/// 1-based indices of the first `n` points of `case` that disagree with
/// `poly`, in ascending order.
pub fn wrong_points(
    case: &TestCase,
    poly: &Polynomial<f64>,
    tolerance: f64,
) -> RecoveryResult<Vec<usize>> {
    let mut wrong = Vec::new();
    for (idx, point) in case.verification_points().iter().enumerate() {
        let on_curve = is_point_on_curve(point, abscissa(idx), poly, tolerance)
            .map_err(|err| RecoveryError::from_radix(idx + 1, err))?;
        if !on_curve {
            debug!(
                point = idx + 1,
                value = %point.value,
                base = point.base,
                "point is off the curve"
            );
            wrong.push(idx + 1);
        }
    }
    Ok(wrong)
}
