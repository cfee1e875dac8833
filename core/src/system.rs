//! Assembly of the Vandermonde system `P(x_i) = y_i` for the first `k`
//! points of a case.

use math::{
    gauss,
    poly::{power, Polynomial},
    Matrix,
};
use tracing::debug;

use crate::{
    error::{MalformedInput, RecoveryError, RecoveryResult},
    traits::PointSource,
};

/// A square system `matrix * coefficients = rhs`.
///
/// Row `i` holds the powers `x_i^(k-1) .. x_i^0` with `x_i = i + 1`, so the
/// solution lists coefficients from the highest power to the constant term.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearSystem {
    pub matrix: Matrix<f64>,
    pub rhs: Vec<f64>,
}

impl LinearSystem {
    /// Number of unknowns.
    pub fn size(&self) -> usize {
        self.rhs.len()
    }

    /// Solve by Gaussian elimination on a copy of the system.
    pub fn solve(&self, tolerance: f64) -> RecoveryResult<Polynomial<f64>> {
        let coefficients = gauss::solve_with_tolerance(
            self.matrix.clone(),
            self.rhs.clone(),
            tolerance,
        )?;
        let residuals = self.residuals(&coefficients)?;
        debug!(
            ?coefficients,
            ?residuals,
            "coefficients after gaussian elimination"
        );
        Ok(Polynomial::new(coefficients))
    }

    /// `matrix * coefficients - rhs`, row by row.
    pub fn residuals(&self, coefficients: &[f64]) -> RecoveryResult<Vec<f64>> {
        let lhs = self.matrix.try_mul_vector(coefficients)?;
        Ok(lhs.iter().zip(&self.rhs).map(|(l, r)| l - r).collect())
    }
}

/// The x-coordinate of the point at 0-based `index`.
pub fn abscissa(index: usize) -> f64 {
    (index + 1) as f64
}

/// Build the `k x k` system for `points`, where `k = points.len()`.
pub fn build_system<P: PointSource>(
    points: &[P],
) -> RecoveryResult<LinearSystem> {
    let k = points.len();
    if k == 0 {
        return Err(MalformedInput::ZeroThreshold.into());
    }

    let rhs = points
        .iter()
        .enumerate()
        .map(|(i, point)| -> RecoveryResult<f64> {
            let y = point
                .decode()
                .map_err(|err| RecoveryError::from_radix(i + 1, err))?;
            if !y.is_finite() {
                let point = i + 1;
                return Err(MalformedInput::ValueOutOfRange { point }.into());
            }
            Ok(y)
        })
        .collect::<RecoveryResult<Vec<_>>>()?;

    let matrix = Matrix::from_fn(k, k, |i, j| power(abscissa(i), k - 1 - j));

    debug!(k, matrix = ?matrix.as_slice(), ?rhs, "built vandermonde system");
    Ok(LinearSystem { matrix, rhs })
}
