//! Outlier-resistant sample normalization by symmetric rank pairing.
//!
//! Given sorted samples `S` of length `n`, the i-th smallest sample is paired
//! with the i-th largest, moving inward:
//!
//! ```text
//! j = n - 1 - i                    for i in 0..n/2
//! variation = 100 - S[i] / S[j] * 100
//! keep S[i] and S[j]  iff  threshold > variation
//! ```
//!
//! The kept samples, re-sorted, form the normalized population. If no pair
//! survives, the full sorted sequence is used instead, so the normalized
//! population is never empty. Fewer than three samples are returned as-is.
//! With an odd `n` the middle sample is never paired and never kept.

use crate::error::Result;
use crate::measurement::SampleStore;

/// Minimum sample count before pairing is attempted.
pub const MIN_SAMPLES_FOR_PAIRING: usize = 3;

/// Percentage by which `low` falls short of `high`.
///
/// `0` when equal, approaching `100` as `low` becomes negligible. `NaN` when
/// both are zero, which never passes the threshold test.
#[inline]
pub fn pair_variation(low: f64, high: f64) -> f64 {
    100.0 - (low / high) * 100.0
}

/// Normalized population of ascending-sorted samples.
///
/// The result is sorted ascending and non-empty whenever `sorted` is.
pub fn normalize_sorted(sorted: &[f64], threshold_percentage: f64) -> Vec<f64> {
    let n = sorted.len();
    if n < MIN_SAMPLES_FOR_PAIRING {
        return sorted.to_vec();
    }

    let mut kept = Vec::with_capacity(n);
    for i in 0..n / 2 {
        let j = n - 1 - i;
        if threshold_percentage > pair_variation(sorted[i], sorted[j]) {
            kept.push(sorted[i]);
            kept.push(sorted[j]);
        }
    }

    if kept.is_empty() {
        tracing::debug!(
            samples = n,
            threshold_percentage,
            "no sample pair within threshold, using raw population"
        );
        return sorted.to_vec();
    }

    kept.sort_by(|a, b| a.total_cmp(b));
    kept
}

/// Normalized population for `name`.
///
/// # Errors
///
/// Returns [`Error::NotFound`](crate::Error::NotFound) if `name` has no samples.
pub fn normalized_samples(
    store: &SampleStore,
    name: &str,
    threshold_percentage: f64,
) -> Result<Vec<f64>> {
    let sorted = store.sorted(name)?;
    Ok(normalize_sorted(&sorted, threshold_percentage))
}
