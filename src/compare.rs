//! Cross-benchmark ranking.
//!
//! Each statistic kind forms one group holding a row per benchmark. Rows are
//! sorted ascending by value, so the first row is the fastest. Every row gets
//! the percentage by which it is slower than the fastest, and when the group
//! is not uniform the first and last rows are flagged fastest and slowest.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::statistics::MeasurementSummary;
use crate::types::StatisticKind;

/// One benchmark's value for one statistic kind within a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    /// Statistic this row belongs to.
    pub kind: StatisticKind,
    /// The statistic's value in milliseconds.
    pub value: f64,
    /// Benchmark name.
    pub test_name: String,
    /// How many percent larger `value` is than the group's minimum, rounded to 3 decimals.
    pub percent_slower_than_fastest: f64,
    /// Set on the lowest row of a non-uniform group.
    pub is_fastest: bool,
    /// Set on the highest row of a non-uniform group.
    pub is_slowest: bool,
    /// Sample count of the benchmark.
    pub operation_count: usize,
    /// Throughput of the benchmark.
    pub ops_per_sec: f64,
}

impl ComparisonRow {
    fn new(kind: StatisticKind, summary: &MeasurementSummary) -> Self {
        Self {
            kind,
            value: summary.statistics.get(kind),
            test_name: summary.test_name.clone(),
            percent_slower_than_fastest: 0.0,
            is_fastest: false,
            is_slowest: false,
            operation_count: summary.operation_count,
            ops_per_sec: summary.ops_per_sec,
        }
    }
}

/// Ranked rows for every statistic kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    benchmarks: Vec<String>,
    groups: BTreeMap<StatisticKind, Vec<ComparisonRow>>,
}

impl Comparison {
    /// Benchmark names in the order their summaries were supplied.
    pub fn benchmarks(&self) -> &[String] {
        &self.benchmarks
    }

    /// Rows for `kind`, fastest first.
    pub fn get(&self, kind: StatisticKind) -> Option<&[ComparisonRow]> {
        self.groups.get(&kind).map(Vec::as_slice)
    }

    /// The row for benchmark `name` within `kind`.
    pub fn row(&self, kind: StatisticKind, name: &str) -> Option<&ComparisonRow> {
        self.get(kind)?.iter().find(|row| row.test_name == name)
    }

    /// The flagged fastest row for `kind`, if the group is not uniform.
    pub fn fastest(&self, kind: StatisticKind) -> Option<&ComparisonRow> {
        self.get(kind)?.first().filter(|row| row.is_fastest)
    }

    /// The flagged slowest row for `kind`, if the group is not uniform.
    pub fn slowest(&self, kind: StatisticKind) -> Option<&ComparisonRow> {
        self.get(kind)?.last().filter(|row| row.is_slowest)
    }

    /// `(kind, rows)` groups in [`StatisticKind`] declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (StatisticKind, &[ComparisonRow])> + '_ {
        self.groups.iter().map(|(kind, rows)| (*kind, rows.as_slice()))
    }

    /// Whether no benchmarks were compared.
    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }
}

/// Rank `summaries` against each other for every statistic kind.
///
/// Recomputed from scratch on every call; the summaries are not modified.
pub fn compare(summaries: &[MeasurementSummary]) -> Comparison {
    if summaries.is_empty() {
        return Comparison::default();
    }

    let groups = StatisticKind::ALL
        .into_iter()
        .map(|kind| {
            let mut rows: Vec<ComparisonRow> = summaries
                .iter()
                .map(|summary| ComparisonRow::new(kind, summary))
                .collect();
            rows.sort_by(|a, b| a.value.total_cmp(&b.value));
            rank(&mut rows);
            tracing::trace!(%kind, rows = rows.len(), "ranked comparison group");
            (kind, rows)
        })
        .collect();

    Comparison {
        benchmarks: summaries.iter().map(|s| s.test_name.clone()).collect(),
        groups,
    }
}

/// Fill in percentages and flags for rows already sorted ascending.
fn rank(rows: &mut [ComparisonRow]) {
    let Some(fastest) = rows.first().map(|row| row.value) else {
        return;
    };

    for row in rows.iter_mut() {
        if row.value == 0.0 {
            continue;
        }
        let fraction = row.value / fastest;
        row.percent_slower_than_fastest = if fraction != 1.0 {
            round_to((100.0 - fraction * 100.0).abs(), 3)
        } else {
            0.0
        };
    }

    if rows.iter().any(|row| row.value != fastest) {
        let last = rows.len() - 1;
        rows[0].is_fastest = true;
        rows[last].is_slowest = true;
    }
}

/// Rounds the binary value half away from zero, not its decimal expansion.
fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}

/// Accumulates summaries one at a time and ranks them on demand.
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    summaries: Vec<MeasurementSummary>,
}

impl Comparator {
    /// Create an empty comparator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one benchmark's summary.
    pub fn add(&mut self, summary: MeasurementSummary) -> &mut Self {
        self.summaries.push(summary);
        self
    }

    /// Summaries added so far, in insertion order.
    pub fn summaries(&self) -> &[MeasurementSummary] {
        &self.summaries
    }

    /// Rank everything added so far.
    pub fn compare(&self) -> Comparison {
        compare(&self.summaries)
    }
}

impl FromIterator<MeasurementSummary> for Comparator {
    fn from_iter<I: IntoIterator<Item = MeasurementSummary>>(iter: I) -> Self {
        Self {
            summaries: iter.into_iter().collect(),
        }
    }
}
