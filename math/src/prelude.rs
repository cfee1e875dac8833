pub use crate::{
    constants::{ELIMINATION_TOLERANCE, MAX_RADIX, MIN_RADIX},
    error::{MathError, MatrixError, RadixError},
    gauss::{solve, solve_with_tolerance},
    matrix::Matrix,
    poly::Polynomial,
    radix::decode,
};
