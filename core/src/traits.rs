use math::{error::RadixError, radix};

/// Abstract source of a sample ordinate written in some base.
///
/// The x-coordinate is never part of the source: it is implied by the
/// position of the point within its case.
pub trait PointSource {
    /// Radix the digits are written in.
    fn base(&self) -> u32;

    /// The raw digit string.
    fn digits(&self) -> &str;

    /// Decode the digits into the sample's y-value.
    fn decode(&self) -> Result<f64, RadixError> {
        radix::decode(self.digits(), self.base())
    }
}
