//! Main `Suite` entry point and builder.

use std::time::Duration;

use crate::compare::{compare, Comparison};
use crate::config::Config;
use crate::error::Result;
use crate::measurement::{SampleStore, Stopwatch, TrialRunner};
use crate::statistics::{normalized_samples, summarize, MeasurementSummary};

/// Owns a [`SampleStore`] and a [`Config`], and runs, summarizes and compares benchmarks.
///
/// Use the builder methods to configure, then call [`run`](Suite::run) once
/// per benchmark.
///
/// # Example
///
/// ```no_run
/// use perfcmp::{StatisticKind, Suite};
///
/// let mut suite = Suite::new().trial_duration_ms(200);
/// suite.run("sum", || (0..1_000u64).sum::<u64>());
/// suite.run("fold", || (0..1_000u64).fold(0, |a, b| a + b));
///
/// let comparison = suite.compare_all()?;
/// let fastest = comparison.fastest(StatisticKind::Average);
/// # Ok::<(), perfcmp::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Suite {
    config: Config,
    store: SampleStore,
}

impl Suite {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`](crate::Error::InvalidConfig) if
    /// `config` fails [`Config::validate`].
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            store: SampleStore::new(),
        })
    }

    /// Set the normalization threshold percentage.
    pub fn threshold(mut self, pct: f64) -> Self {
        self.config = self.config.threshold_percentage(pct);
        self
    }

    /// Set the default trial duration.
    pub fn trial_duration(mut self, duration: Duration) -> Self {
        self.config.trial_duration = duration;
        self
    }

    /// Set the default trial duration in milliseconds.
    pub fn trial_duration_ms(mut self, ms: u64) -> Self {
        self.config.trial_duration = Duration::from_millis(ms);
        self
    }

    /// Set warmup invocations per trial.
    pub fn warmup(mut self, n: usize) -> Self {
        self.config.warmup = n;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The samples recorded so far.
    pub fn store(&self) -> &SampleStore {
        &self.store
    }

    /// Mutable access to the samples, e.g. to record externally timed durations.
    pub fn store_mut(&mut self) -> &mut SampleStore {
        &mut self.store
    }

    /// Run a trial of the configured duration.
    pub fn run<F, T>(&mut self, name: &str, operation: F)
    where
        F: FnMut() -> T,
    {
        let budget = self.config.trial_duration;
        self.run_for(name, budget, operation);
    }

    /// Run a trial with an explicit budget.
    pub fn run_for<F, T>(&mut self, name: &str, budget: Duration, operation: F)
    where
        F: FnMut() -> T,
    {
        TrialRunner::new(self.config.warmup).run(&mut self.store, name, budget, operation);
    }

    /// Start timing one invocation by hand.
    pub fn start<'a>(&'a mut self, name: &'a str) -> Stopwatch<'a> {
        self.store.start(name)
    }

    /// Summary for `name` at the configured threshold.
    pub fn summary(&self, name: &str) -> Result<MeasurementSummary> {
        summarize(&self.store, name, self.config.threshold_percentage)
    }

    /// Normalized population for `name` at the configured threshold.
    pub fn normalized_samples(&self, name: &str) -> Result<Vec<f64>> {
        normalized_samples(&self.store, name, self.config.threshold_percentage)
    }

    /// Summaries for each of `names`, in order.
    ///
    /// Fails on the first name without samples.
    pub fn summaries<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<MeasurementSummary>> {
        names.iter().map(|name| self.summary(name.as_ref())).collect()
    }

    /// Compare the named benchmarks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`](crate::Error::NotFound) if any name has no
    /// samples; nothing is compared in that case.
    pub fn compare<S: AsRef<str>>(&self, names: &[S]) -> Result<Comparison> {
        Ok(compare(&self.summaries(names)?))
    }

    /// Compare every benchmark with samples, in first-recorded order.
    pub fn compare_all(&self) -> Result<Comparison> {
        let names: Vec<&str> = self.store.names().collect();
        self.compare(names.as_slice())
    }
}
