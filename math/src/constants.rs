//! Shared constants for the reconstruction math primitives.

/// Pivots with a magnitude below this value are treated as zero.
pub const ELIMINATION_TOLERANCE: f64 = 1e-9;

/// Smallest supported radix.
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix (digits `0-9` followed by `A-Z`).
pub const MAX_RADIX: u32 = 36;
