//! Sample generation shared by the integration tests and benches.

use secret_recovery::SamplePoint;

/// Lowercase digits of `value` in `base`.
pub fn to_radix(mut value: u64, base: u32) -> String {
    if value == 0 {
        return "0".into();
    }
    let mut digits = Vec::new();
    while value > 0 {
        let d = (value % u64::from(base)) as u32;
        digits.extend(char::from_digit(d, base));
        value /= u64::from(base);
    }
    digits.iter().rev().collect()
}

/// Horner evaluation with coefficients highest power first.
pub fn eval(coefficients: &[u64], x: u64) -> u64 {
    coefficients.iter().fold(0, |acc, &c| acc * x + c)
}

/// Samples at x = 1..=n, the i-th encoded in `base_for(i)`.
pub fn encoded_samples(
    coefficients: &[u64],
    n: usize,
    mut base_for: impl FnMut(usize) -> u32,
) -> Vec<SamplePoint> {
    (1..=n)
        .map(|x| {
            let base = base_for(x - 1);
            let y = eval(coefficients, x as u64);
            SamplePoint::new(base, to_radix(y, base))
        })
        .collect()
}
