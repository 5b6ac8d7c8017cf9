//! Five-number summaries.

use crate::display::ListDisplay;
use crate::error::StatsError;
use crate::sample::Sample;
use std::fmt;

/// Minimum, lower quartile, median, upper quartile, maximum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quantiles(pub [f64; 5]);

impl Quantiles {
    /// Smallest sample.
    pub fn min(&self) -> f64 {
        self.0[0]
    }

    /// 25th percentile.
    pub fn lower_quartile(&self) -> f64 {
        self.0[1]
    }

    /// 50th percentile.
    pub fn median(&self) -> f64 {
        self.0[2]
    }

    /// 75th percentile.
    pub fn upper_quartile(&self) -> f64 {
        self.0[3]
    }

    /// Largest sample.
    pub fn max(&self) -> f64 {
        self.0[4]
    }

    /// The five values in ascending order.
    pub fn as_array(&self) -> [f64; 5] {
        self.0
    }
}

impl fmt::Display for Quantiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&ListDisplay(&self.0), f)
    }
}

/// Five-number summary of `xs`.
///
/// The `k`-th quantile (k = 0..=4) sits at fractional rank
/// `k * (n - 1) / 4` in the sorted sample and is linearly interpolated
/// between the two neighbouring order statistics.
///
/// # Examples
///
/// ```
/// use gridkit_stats::quantiles;
///
/// let q = quantiles(&[5, 3, 1, 4, 2]).unwrap();
/// assert_eq!(q.as_array(), [1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert_eq!(q.to_string(), "[1, 2, 3, 4, 5]");
/// ```
pub fn quantiles<T: Sample>(xs: &[T]) -> Result<Quantiles, StatsError> {
    if xs.is_empty() {
        return Err(StatsError::EmptySample);
    }
    let mut sorted: Vec<f64> = xs.iter().map(|&x| x.to_f64()).collect();
    sorted.sort_by(f64::total_cmp);

    let span = sorted.len() - 1;
    let mut out = [0.0; 5];
    for (k, q) in out.iter_mut().enumerate() {
        // rank * 4, kept integral so exact ranks hit an order statistic
        let j = k * span;
        let lo = sorted[j / 4];
        *q = if j % 4 == 0 {
            lo
        } else {
            let hi = sorted[j / 4 + 1];
            let t = (j % 4) as f64 * 0.25;
            lo + t * (hi - lo)
        };
    }
    Ok(Quantiles(out))
}
