use std::ops::{Deref, DerefMut, Index, IndexMut};

use crate::error::{MatrixError, Result};

use num_traits::Float;

/// A dense, rectangular matrix of real numbers stored row-major, indexed
/// by row.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<F: Float> {
    rows: Vec<Vec<F>>,
}

const MATRIX_VECTOR_OP: &str = "matrix-vector multiplication";

impl<F: Float> Matrix<F> {
    /// Wrap `rows`, rejecting rows of differing lengths.
    pub fn try_new(rows: Vec<Vec<F>>) -> Result<Self> {
        Self::ensure_rectangular_rows(&rows)?;
        Ok(Self { rows })
    }

    /// Build a matrix entry by entry from `f(row, col)`.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> F,
    ) -> Self {
        let data = (0..rows)
            .map(|i| (0..cols).map(|j| f(i, j)).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        Self { rows: data }
    }

    /// Borrow the underlying rows.
    pub fn as_slice(&self) -> &[Vec<F>] {
        &self.rows
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (0 if empty).
    pub fn cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Swap two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.rows.swap(a, b);
    }

    /// `self * v`, checking that `v` has one entry per column.
    pub fn try_mul_vector(&self, v: &[F]) -> Result<Vec<F>> {
        self.validate_vector_multiplication(v.len())?;
        Ok(self.mul_vector_inner(v))
    }

    fn validate_vector_multiplication(
        &self,
        vector_len: usize,
    ) -> core::result::Result<(), MatrixError> {
        if self.rows.is_empty() {
            return Err(MatrixError::Empty {
                operation: MATRIX_VECTOR_OP,
            });
        }

        let expected_cols = self.ensure_rectangular()?;
        let matrix_rows = self.rows.len();

        if expected_cols != vector_len {
            return Err(MatrixError::VectorShapeMismatch {
                operation: MATRIX_VECTOR_OP,
                matrix_rows,
                matrix_cols: expected_cols,
                vector_len,
            });
        }

        Ok(())
    }

    fn mul_vector_inner(&self, v: &[F]) -> Vec<F> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(v)
                    .fold(F::zero(), |acc, (&a_ij, &v_j)| acc + a_ij * v_j)
            })
            .collect()
    }

    fn ensure_rectangular(&self) -> core::result::Result<usize, MatrixError> {
        Self::ensure_rectangular_rows(&self.rows)
    }

    fn ensure_rectangular_rows(
        rows: &[Vec<F>],
    ) -> core::result::Result<usize, MatrixError> {
        if let Some((first, rest)) = rows.split_first() {
            let expected = first.len();
            for (offset, row) in rest.iter().enumerate() {
                if row.len() != expected {
                    return Err(MatrixError::Ragged {
                        row: offset + 1,
                        expected,
                        found: row.len(),
                    });
                }
            }
            Ok(expected)
        } else {
            Ok(0)
        }
    }
}

/// Immutable indexing by row.
impl<F: Float> Index<usize> for Matrix<F> {
    type Output = Vec<F>;
    fn index(&self, i: usize) -> &Self::Output {
        &self.rows[i]
    }
}

/// Mutable indexing by row.
impl<F: Float> IndexMut<usize> for Matrix<F> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.rows[i]
    }
}

/// Deref to a slice of rows.
impl<F: Float> Deref for Matrix<F> {
    type Target = [Vec<F>];
    fn deref(&self) -> &Self::Target {
        &self.rows
    }
}

/// DerefMut to a slice of rows.
impl<F: Float> DerefMut for Matrix<F> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.rows
    }
}
