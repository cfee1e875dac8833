pub mod constants;
pub mod error;
pub mod gauss;
pub mod matrix;
pub mod poly;
pub mod prelude;
pub mod radix;

pub use matrix::Matrix;
