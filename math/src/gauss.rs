//! Dense Gaussian elimination with partial pivoting.
//!
//! The solver consumes its inputs: rows are swapped and reduced in place, so
//! callers that need the original system must clone it first.

use num_traits::Float;
use tracing::trace;

use crate::{
    constants::ELIMINATION_TOLERANCE,
    error::{MatrixError, Result},
    matrix::Matrix,
};

const SOLVE_OP: &str = "gaussian elimination";

/// Solve `matrix * x = rhs` using [`ELIMINATION_TOLERANCE`] as the
/// near-zero pivot threshold.
pub fn solve<F: Float>(matrix: Matrix<F>, rhs: Vec<F>) -> Result<Vec<F>> {
    let tolerance = F::from(ELIMINATION_TOLERANCE).unwrap_or_else(F::epsilon);
    solve_with_tolerance(matrix, rhs, tolerance)
}

/// Solve `matrix * x = rhs`, failing with [`MatrixError::Singular`] when the
/// best available pivot in some column has magnitude below `tolerance`.
///
/// Pivoting picks the row with the largest absolute value in the current
/// column; the first such row wins ties, so results are deterministic.
pub fn solve_with_tolerance<F: Float>(
    mut matrix: Matrix<F>,
    mut rhs: Vec<F>,
    tolerance: F,
) -> Result<Vec<F>> {
    let n = validate_system(&matrix, rhs.len())?;

    for col in 0..n {
        let pivot_row = select_pivot(&matrix, col);
        if pivot_row != col {
            matrix.swap_rows(col, pivot_row);
            rhs.swap(col, pivot_row);
        }

        let pivot = matrix[col][col];
        trace!(
            column = col,
            row = pivot_row,
            pivot = ?pivot.to_f64(),
            "selected pivot"
        );
        if pivot.is_nan() || pivot.abs() < tolerance {
            return Err(MatrixError::Singular {
                column: col,
                pivot: pivot.to_f64().unwrap_or(f64::NAN),
            }
            .into());
        }

        let (upper, lower) = matrix.split_at_mut(col + 1);
        let pivot_vals = &upper[col];
        for (offset, row) in lower.iter_mut().enumerate() {
            let factor = row[col] / pivot;
            for (entry, &p) in row[col..].iter_mut().zip(&pivot_vals[col..]) {
                *entry = *entry - factor * p;
            }
            let target = col + 1 + offset;
            rhs[target] = rhs[target] - factor * rhs[col];
        }
    }

    Ok(back_substitute(&matrix, rhs))
}

fn validate_system<F: Float>(
    matrix: &Matrix<F>,
    rhs_len: usize,
) -> core::result::Result<usize, MatrixError> {
    let (rows, cols) = matrix.shape();
    if rows == 0 {
        return Err(MatrixError::Empty {
            operation: SOLVE_OP,
        });
    }
    if matrix.iter().any(|row| row.len() != cols) || rows != cols {
        return Err(MatrixError::NotSquare {
            operation: SOLVE_OP,
            rows,
            cols,
        });
    }
    if rhs_len != rows {
        return Err(MatrixError::VectorShapeMismatch {
            operation: SOLVE_OP,
            matrix_rows: rows,
            matrix_cols: cols,
            vector_len: rhs_len,
        });
    }
    Ok(rows)
}

fn select_pivot<F: Float>(matrix: &Matrix<F>, col: usize) -> usize {
    let mut best = col;
    for row in col + 1..matrix.rows() {
        if matrix[row][col].abs() > matrix[best][col].abs() {
            best = row;
        }
    }
    best
}

/// Back substitution over an upper-triangular system. Consumes `rhs` as the
/// solution buffer.
fn back_substitute<F: Float>(upper: &Matrix<F>, mut x: Vec<F>) -> Vec<F> {
    let n = x.len();
    for i in (0..n).rev() {
        let tail = upper[i][i + 1..]
            .iter()
            .zip(&x[i + 1..])
            .fold(F::zero(), |acc, (&a, &xj)| acc + a * xj);
        x[i] = (x[i] - tail) / upper[i][i];
    }
    x
}
