//! Measurement infrastructure.
//!
//! This module provides:
//! - The sample store holding raw per-benchmark durations
//! - Duration-boxed trial runs over a caller-supplied operation
//! - Manual stopwatch measurements

mod runner;
mod store;
mod timer;

pub use runner::TrialRunner;
pub use store::{SampleSet, SampleStore};
pub use timer::{black_box, duration_ms, time_ms, Stopwatch};
