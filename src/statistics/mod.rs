//! Statistics engine.
//!
//! This module provides:
//! - Order statistics (min, max, median, mean) over sorted samples
//! - Rank-pairing normalization that drops widely spread extreme pairs
//! - Per-benchmark summaries combining both, plus throughput

mod normalize;
mod order;
mod summary;

pub use normalize::{
    normalize_sorted, normalized_samples, pair_variation, MIN_SAMPLES_FOR_PAIRING,
};
pub use order::{average, median_sorted, OrderStats};
pub use summary::{summarize, MeasurementSummary};
