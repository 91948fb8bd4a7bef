//! Order statistics over ascending-sorted samples.
//!
//! All functions here take data that MUST already be sorted ascending.
//! No verification is performed.

/// Arithmetic mean.
///
/// Returns `0.0` for an empty slice and the single value for a one-element slice.
pub fn average(samples: &[f64]) -> f64 {
    match samples.len() {
        0 => 0.0,
        1 => samples[0],
        n => samples.iter().sum::<f64>() / n as f64,
    }
}

/// Median of sorted data: the middle element for odd lengths, the mean of
/// the two middle elements for even lengths.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn median_sorted(sorted: &[f64]) -> f64 {
    assert!(!sorted.is_empty(), "Cannot compute median of empty slice");

    let n = sorted.len();
    let middle = n / 2;
    if n % 2 != 0 {
        sorted[middle]
    } else {
        (sorted[middle - 1] + sorted[middle]) / 2.0
    }
}

/// Min, max, median and mean of one sorted population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderStats {
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// Median value.
    pub median: f64,
    /// Mean value.
    pub average: f64,
}

impl OrderStats {
    /// Compute all four statistics from sorted data.
    ///
    /// # Panics
    ///
    /// Panics if `sorted` is empty.
    pub fn from_sorted(sorted: &[f64]) -> Self {
        assert!(!sorted.is_empty(), "Cannot compute order statistics of empty slice");

        Self {
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            median: median_sorted(sorted),
            average: average(sorted),
        }
    }
}
