//! Positional decoding of digit strings in bases 2 through 36.

use crate::{
    constants::{MAX_RADIX, MIN_RADIX},
    error::RadixError,
};

/// Value of a single digit character in `base`.
///
/// Digits are `0-9` followed by the letters `A-Z` (either case).
pub fn digit_value(digit: char, base: u32) -> Result<u32, RadixError> {
    ensure_base(base)?;
    digit_in_base(digit, 0, base)
}

/// Decode `value` written in `base` into a real number.
///
/// Accumulation happens in `f64`, so results above 2^53 are rounded to the
/// nearest representable value.
///
/// ```
/// use math::radix::decode;
///
/// assert_eq!(decode("FF", 16).unwrap(), 255.0);
/// assert_eq!(decode("10", 7).unwrap(), 7.0);
/// ```
pub fn decode(value: &str, base: u32) -> Result<f64, RadixError> {
    ensure_base(base)?;
    if value.is_empty() {
        return Err(RadixError::Empty);
    }

    let radix = f64::from(base);
    value
        .chars()
        .enumerate()
        .try_fold(0.0_f64, |acc, (position, digit)| {
            let d = digit_in_base(digit, position, base)?;
            Ok(acc * radix + f64::from(d))
        })
}

fn ensure_base(base: u32) -> Result<(), RadixError> {
    if (MIN_RADIX..=MAX_RADIX).contains(&base) {
        Ok(())
    } else {
        Err(RadixError::InvalidBase(base))
    }
}

fn digit_in_base(
    digit: char,
    position: usize,
    base: u32,
) -> Result<u32, RadixError> {
    digit
        .to_digit(MAX_RADIX)
        .filter(|&d| d < base)
        .ok_or(RadixError::InvalidDigit {
            digit,
            position,
            base,
        })
}
