//! # perfcmp
//!
//! Time-boxed micro-benchmarks with outlier-resistant statistics.
//!
//! This crate runs an operation repeatedly for a wall-clock budget, records
//! the duration of every invocation, and derives:
//! - Min, max, median and average in milliseconds
//! - The same four statistics over a "normalized" population that drops
//!   widely spread extreme sample pairs
//! - Operation count and ops/sec
//! - A ranking across benchmarks flagging the fastest and slowest, with the
//!   percentage each one trails the fastest by
//!
//! ## Quick Start
//!
//! ```no_run
//! use perfcmp::{output, StatisticKind, Suite};
//!
//! let mut suite = Suite::new().trial_duration_ms(500);
//! let data: Vec<u32> = (0..10_000).rev().collect();
//!
//! suite.run("sort", || {
//!     let mut v = data.clone();
//!     v.sort();
//!     v
//! });
//! suite.run("sort_unstable", || {
//!     let mut v = data.clone();
//!     v.sort_unstable();
//!     v
//! });
//!
//! let comparison = suite.compare(&["sort", "sort_unstable"])?;
//! println!("{}", output::format_comparison(&comparison, &output::DEFAULT_KINDS));
//! if let Some(row) = comparison.fastest(StatisticKind::NormalizedAverage) {
//!     println!("fastest: {}", row.test_name);
//! }
//! # Ok::<(), perfcmp::Error>(())
//! ```
//!
//! ## Lower-level pieces
//!
//! [`SampleStore`], [`TrialRunner`], [`statistics::summarize`] and
//! [`compare::compare`] can be used directly when a [`Suite`] is too coarse,
//! e.g. to share one store across several runners.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod error;
mod suite;
mod types;

// Functional modules
pub mod compare;
pub mod measurement;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use compare::{Comparator, Comparison, ComparisonRow};
pub use config::{Config, DEFAULT_THRESHOLD_PCT, THRESHOLD_ENV, TRIAL_MS_ENV};
pub use error::{Error, Result};
pub use measurement::{SampleSet, SampleStore, Stopwatch, TrialRunner};
pub use statistics::MeasurementSummary;
pub use suite::Suite;
pub use types::{StatisticKind, Statistics};
