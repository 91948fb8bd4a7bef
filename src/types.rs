//! Statistic kinds and the typed statistics record.

use serde::{Deserialize, Serialize};

/// One of the eight statistics computed for every benchmark.
///
/// Declaration order is the order used when iterating comparison groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatisticKind {
    /// Arithmetic mean of all samples.
    Average,
    /// Arithmetic mean of the normalized population.
    NormalizedAverage,
    /// Largest sample.
    Max,
    /// Largest sample of the normalized population.
    NormalizedMax,
    /// Smallest sample.
    Min,
    /// Smallest sample of the normalized population.
    NormalizedMin,
    /// Middle sample (mean of the two middle samples for even counts).
    Median,
    /// Median of the normalized population.
    NormalizedMedian,
}

impl StatisticKind {
    /// Every kind, in declaration order.
    pub const ALL: [StatisticKind; 8] = [
        StatisticKind::Average,
        StatisticKind::NormalizedAverage,
        StatisticKind::Max,
        StatisticKind::NormalizedMax,
        StatisticKind::Min,
        StatisticKind::NormalizedMin,
        StatisticKind::Median,
        StatisticKind::NormalizedMedian,
    ];

    /// Stable camelCase name, identical to the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            StatisticKind::Average => "average",
            StatisticKind::NormalizedAverage => "normalizedAverage",
            StatisticKind::Max => "max",
            StatisticKind::NormalizedMax => "normalizedMax",
            StatisticKind::Min => "min",
            StatisticKind::NormalizedMin => "normalizedMin",
            StatisticKind::Median => "median",
            StatisticKind::NormalizedMedian => "normalizedMedian",
        }
    }

    /// Whether this kind is computed over the normalized population.
    pub fn is_normalized(self) -> bool {
        matches!(
            self,
            StatisticKind::NormalizedAverage
                | StatisticKind::NormalizedMax
                | StatisticKind::NormalizedMin
                | StatisticKind::NormalizedMedian
        )
    }
}

impl std::fmt::Display for StatisticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw and normalized order statistics for one benchmark, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Mean of all samples.
    pub average: f64,
    /// Mean of the normalized population.
    pub normalized_average: f64,
    /// Largest sample.
    pub max: f64,
    /// Largest normalized sample.
    pub normalized_max: f64,
    /// Smallest sample.
    pub min: f64,
    /// Smallest normalized sample.
    pub normalized_min: f64,
    /// Median sample.
    pub median: f64,
    /// Median of the normalized population.
    pub normalized_median: f64,
}

impl Statistics {
    /// Value of the given statistic.
    pub fn get(&self, kind: StatisticKind) -> f64 {
        match kind {
            StatisticKind::Average => self.average,
            StatisticKind::NormalizedAverage => self.normalized_average,
            StatisticKind::Max => self.max,
            StatisticKind::NormalizedMax => self.normalized_max,
            StatisticKind::Min => self.min,
            StatisticKind::NormalizedMin => self.normalized_min,
            StatisticKind::Median => self.median,
            StatisticKind::NormalizedMedian => self.normalized_median,
        }
    }

    /// `(kind, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (StatisticKind, f64)> + '_ {
        StatisticKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}
