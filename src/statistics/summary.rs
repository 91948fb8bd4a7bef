//! Per-benchmark measurement summaries.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::measurement::SampleStore;
use crate::types::Statistics;

use super::normalize::normalize_sorted;
use super::order::OrderStats;

/// Computed statistics for one benchmark.
///
/// Field names are a stable contract for renderers; they serialize in camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementSummary {
    /// Benchmark name.
    pub test_name: String,
    /// Raw and normalized order statistics in milliseconds.
    pub statistics: Statistics,
    /// Number of recorded samples.
    pub operation_count: usize,
    /// `operation_count` divided by the trial duration in seconds.
    pub ops_per_sec: f64,
}

impl MeasurementSummary {
    /// Summarize `samples` (any order) directly, without a store.
    ///
    /// An unset or zero `trial_duration` counts as one second for throughput.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `samples` is empty.
    pub fn from_samples(
        test_name: &str,
        samples: &[f64],
        trial_duration: Option<Duration>,
        threshold_percentage: f64,
    ) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::not_found(test_name));
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        Ok(Self::from_sorted(test_name, &sorted, trial_duration, threshold_percentage))
    }

    fn from_sorted(
        test_name: &str,
        sorted: &[f64],
        trial_duration: Option<Duration>,
        threshold_percentage: f64,
    ) -> Self {
        let raw = OrderStats::from_sorted(sorted);
        let normalized = OrderStats::from_sorted(&normalize_sorted(sorted, threshold_percentage));

        let operation_count = sorted.len();
        let seconds = trial_duration
            .map(|d| d.as_secs_f64())
            .filter(|&s| s > 0.0)
            .unwrap_or(1.0);

        Self {
            test_name: test_name.to_string(),
            statistics: Statistics {
                average: raw.average,
                normalized_average: normalized.average,
                max: raw.max,
                normalized_max: normalized.max,
                min: raw.min,
                normalized_min: normalized.min,
                median: raw.median,
                normalized_median: normalized.median,
            },
            operation_count,
            ops_per_sec: operation_count as f64 / seconds,
        }
    }
}

/// Summarize the samples recorded for `name`.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if `name` has no samples.
pub fn summarize(
    store: &SampleStore,
    name: &str,
    threshold_percentage: f64,
) -> Result<MeasurementSummary> {
    let set = store.get(name)?;
    Ok(MeasurementSummary::from_sorted(
        name,
        &set.sorted(),
        set.trial_duration(),
        threshold_percentage,
    ))
}
