//! Real-valued polynomials with coefficients stored from the highest power
//! down to the constant term.
//!
//! This is the ordering produced by solving a Vandermonde system whose
//! columns run from `x^(k-1)` to `x^0`.

use num_traits::Float;

#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial<F: Float> {
    coefficients: Vec<F>,
}

impl<F: Float> Polynomial<F> {
    /// Wrap coefficients given highest power first.
    pub fn new(coefficients: Vec<F>) -> Self {
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    /// Number of coefficients (degree + 1 for a non-empty polynomial).
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// The coefficient of `x^0`, zero for an empty polynomial.
    pub fn constant_term(&self) -> F {
        self.coefficients.last().copied().unwrap_or_else(F::zero)
    }

    /// Evaluate at `x` as the sum of `c_i * x^(len-1-i)`, added from the
    /// highest power down.
    pub fn evaluate(&self, x: F) -> F {
        let degree = self.coefficients.len().saturating_sub(1);
        self.coefficients
            .iter()
            .enumerate()
            .fold(F::zero(), |acc, (i, &c)| acc + c * power(x, degree - i))
    }
}

/// `x^exponent` with an integer exponent.
pub fn power<F: Float>(x: F, exponent: usize) -> F {
    match i32::try_from(exponent) {
        Ok(e) => x.powi(e),
        Err(_) => F::from(exponent).map_or_else(F::nan, |e| x.powf(e)),
    }
}
