use math::error::{MathError, MatrixError, RadixError};
use thiserror::Error;

/// Result type specialized for secret recovery.
pub type RecoveryResult<T> = std::result::Result<T, RecoveryError>;

/// Errors that abort the reconstruction of a single test case.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecoveryError {
    #[error(
        "point {point}: invalid digit {digit:?} at position {position} \
         for base {base}"
    )]
    InvalidDigit {
        point: usize,
        digit: char,
        position: usize,
        base: u32,
    },
    #[error(
        "matrix is singular or nearly singular: pivot {pivot:e} in column {column}"
    )]
    SingularMatrix { column: usize, pivot: f64 },
    #[error("constant term {constant} does not round to a 64-bit secret")]
    SecretOutOfRange { constant: f64 },
    #[error("malformed input: {0}")]
    MalformedInput(#[from] MalformedInput),
}

/// Precondition violations in a test case record.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedInput {
    #[error("threshold k must be at least 1")]
    ZeroThreshold,
    #[error("threshold k = {k} exceeds point count n = {n}")]
    ThresholdExceedsPoints { k: usize, n: usize },
    #[error("expected {expected} points, found {found}")]
    MissingPoints { expected: usize, found: usize },
    #[error("point {point}: base {base} is outside the supported range 2..=36")]
    InvalidBase { point: usize, base: u32 },
    #[error("point {point}: value is empty")]
    EmptyValue { point: usize },
    #[error("point {point}: value is too large for a finite f64")]
    ValueOutOfRange { point: usize },
    #[error(transparent)]
    Math(MathError),
}

impl RecoveryError {
    /// Attach the 1-based `point` index to a decoding failure.
    pub fn from_radix(point: usize, err: RadixError) -> Self {
        match err {
            RadixError::InvalidDigit {
                digit,
                position,
                base,
            } => RecoveryError::InvalidDigit {
                point,
                digit,
                position,
                base,
            },
            RadixError::InvalidBase(base) => {
                MalformedInput::InvalidBase { point, base }.into()
            }
            RadixError::Empty => MalformedInput::EmptyValue { point }.into(),
            other => MalformedInput::Math(other.into()).into(),
        }
    }
}

impl From<MatrixError> for RecoveryError {
    fn from(value: MatrixError) -> Self {
        match value {
            MatrixError::Singular { column, pivot } => {
                RecoveryError::SingularMatrix { column, pivot }
            }
            other => MalformedInput::Math(other.into()).into(),
        }
    }
}

impl From<MathError> for RecoveryError {
    fn from(value: MathError) -> Self {
        match value {
            MathError::Matrix(err) => err.into(),
            other => MalformedInput::Math(other).into(),
        }
    }
}
