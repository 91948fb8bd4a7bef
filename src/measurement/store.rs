//! Per-benchmark storage of raw duration samples.

use std::collections::HashMap;
use std::time::Duration;

use crate::error::{Error, Result};

use super::timer::Stopwatch;

/// All samples recorded for one benchmark name.
#[derive(Debug, Clone, Default)]
pub struct SampleSet {
    /// Durations in milliseconds, in insertion order.
    samples: Vec<f64>,
    /// Budget of the most recent trial run, if any.
    trial_duration: Option<Duration>,
}

impl SampleSet {
    /// Durations in insertion order.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Budget of the most recent trial run.
    pub fn trial_duration(&self) -> Option<Duration> {
        self.trial_duration
    }

    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples have been recorded.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Fresh ascending-sorted copy of the samples.
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.samples.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        sorted
    }
}

/// Append-only sample registry keyed by benchmark name.
///
/// Names are used verbatim. Sets are created on first use and live as long
/// as the store.
#[derive(Debug, Clone, Default)]
pub struct SampleStore {
    sets: HashMap<String, SampleSet>,
    /// Names in first-seen order.
    order: Vec<String>,
}

impl SampleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, name: &str) -> &mut SampleSet {
        if !self.sets.contains_key(name) {
            self.order.push(name.to_string());
        }
        self.sets.entry(name.to_string()).or_default()
    }

    /// Append one duration (milliseconds) to the set for `name`.
    ///
    /// # Panics
    ///
    /// Panics if `duration_ms` is negative or not finite.
    pub fn record(&mut self, name: &str, duration_ms: f64) {
        assert!(
            duration_ms.is_finite() && duration_ms >= 0.0,
            "duration_ms must be finite and non-negative"
        );
        self.entry(name).samples.push(duration_ms);
    }

    /// Store the wall-clock budget used for throughput, replacing any previous one.
    pub fn set_trial_duration(&mut self, name: &str, duration: Duration) {
        self.entry(name).trial_duration = Some(duration);
    }

    /// Start timing one invocation by hand; [`Stopwatch::stop`] records it under `name`.
    pub fn start<'a>(&'a mut self, name: &'a str) -> Stopwatch<'a> {
        Stopwatch::start(self, name)
    }

    /// The set for `name`, if it holds at least one sample.
    pub fn get(&self, name: &str) -> Result<&SampleSet> {
        self.sets
            .get(name)
            .filter(|set| !set.is_empty())
            .ok_or_else(|| Error::not_found(name))
    }

    /// Ascending-sorted copy of the samples for `name`.
    ///
    /// The stored insertion order is left untouched.
    pub fn sorted(&self, name: &str) -> Result<Vec<f64>> {
        self.get(name).map(SampleSet::sorted)
    }

    /// Budget of the most recent trial for `name`.
    pub fn trial_duration(&self, name: &str) -> Option<Duration> {
        self.sets.get(name).and_then(SampleSet::trial_duration)
    }

    /// Number of samples recorded for `name` (0 if unknown).
    pub fn len(&self, name: &str) -> usize {
        self.sets.get(name).map_or(0, SampleSet::len)
    }

    /// Whether `name` has at least one sample.
    pub fn contains(&self, name: &str) -> bool {
        self.len(name) > 0
    }

    /// Names holding at least one sample, in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.order
            .iter()
            .map(String::as_str)
            .filter(move |name| self.contains(name))
    }

    /// Whether the store holds no samples at all.
    pub fn is_empty(&self) -> bool {
        self.names().next().is_none()
    }
}
