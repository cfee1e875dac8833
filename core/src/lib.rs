//! Recover the constant term of a polynomial from samples whose values are
//! written in arbitrary bases, and flag samples that do not lie on it.

pub mod case;
pub mod driver;
pub mod error;
pub mod params;
pub mod point;
pub mod system;
pub mod traits;
pub mod verify;

pub use case::{Keys, TestCase};
pub use driver::{run_batch, run_case, CaseOutcome, Recovery};
pub use error::{MalformedInput, RecoveryError, RecoveryResult};
pub use params::RecoveryConfig;
pub use point::SamplePoint;
