use thiserror::Error;

pub mod radix {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("base {0} is outside the supported range 2..=36")]
        InvalidBase(u32),
        #[error("value string cannot be empty")]
        Empty,
        #[error("invalid digit {digit:?} at position {position} for base {base}")]
        InvalidDigit {
            digit: char,
            position: usize,
            base: u32,
        },
    }
}

pub mod matrix {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("matrix cannot be empty during {operation}")]
        Empty { operation: &'static str },
        #[error(
            "matrix is ragged: row {row} has {found} columns but expected \
             {expected}"
        )]
        Ragged {
            row: usize,
            expected: usize,
            found: usize,
        },
        #[error("matrix must be square for {operation}, got {rows}x{cols}")]
        NotSquare {
            operation: &'static str,
            rows: usize,
            cols: usize,
        },
        #[error(
            "matrix/vector shape mismatch during {operation}: \
             matrix is {matrix_rows}x{matrix_cols}, vector has {vector_len} entries"
        )]
        VectorShapeMismatch {
            operation: &'static str,
            matrix_rows: usize,
            matrix_cols: usize,
            vector_len: usize,
        },
        #[error(
            "matrix is singular or nearly singular: pivot {pivot:e} in \
             column {column}"
        )]
        Singular { column: usize, pivot: f64 },
    }
}

pub use matrix::Error as MatrixError;
pub use radix::Error as RadixError;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Radix(#[from] RadixError),
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

pub type Error = MathError;
