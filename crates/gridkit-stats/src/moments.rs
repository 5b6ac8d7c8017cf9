//! Mean, sample variance, and standard deviation.

use crate::sample::Sample;

/// Arithmetic mean. An empty sample has mean `0.0`.
pub fn mean<T: Sample>(xs: &[T]) -> f64 {
    let sum: f64 = xs.iter().map(|&x| x.to_f64()).sum();
    sum / xs.len().max(1) as f64
}

/// Sample variance with Bessel's correction (divisor `n - 1`).
///
/// Samples of zero or one value have variance `0.0`.
pub fn variance<T: Sample>(xs: &[T]) -> f64 {
    let m = mean(xs);
    let sum: f64 = xs
        .iter()
        .map(|&x| {
            let d = x.to_f64() - m;
            d * d
        })
        .sum();
    sum / xs.len().saturating_sub(1).max(1) as f64
}

/// Sample standard deviation: the square root of [`variance`].
pub fn stddev<T: Sample>(xs: &[T]) -> f64 {
    variance(xs).sqrt()
}
