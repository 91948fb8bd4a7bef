//! Configuration for trial runs and normalization.

use std::time::Duration;

use crate::error::{Error, Result};

/// Default threshold percentage for the pairing normalization.
pub const DEFAULT_THRESHOLD_PCT: f64 = 10.0;

/// Environment variable overriding [`Config::threshold_percentage`].
pub const THRESHOLD_ENV: &str = "PERFCMP_THRESHOLD_PCT";

/// Environment variable overriding [`Config::trial_duration`], in milliseconds.
pub const TRIAL_MS_ENV: &str = "PERFCMP_TRIAL_MS";

/// Configuration options for a [`Suite`](crate::Suite).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Cutoff for the pairing normalization.
    ///
    /// A (low, high) sample pair is kept in the normalized population only when
    /// the low sample falls short of the high one by less than this many percent.
    /// Default: 10.0.
    pub threshold_percentage: f64,

    /// Wall-clock budget of a trial run when none is given explicitly.
    ///
    /// Default: 1 second.
    pub trial_duration: Duration,

    /// Untimed invocations run before each trial's timed loop.
    ///
    /// Default: 0.
    pub warmup: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold_percentage: DEFAULT_THRESHOLD_PCT,
            trial_duration: Duration::from_secs(1),
            warmup: 0,
        }
    }
}

impl Config {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Short trials for development loops:
    /// - 250 ms trial duration
    /// - no warmup
    pub fn quick() -> Self {
        Self {
            trial_duration: Duration::from_millis(250),
            ..Default::default()
        }
    }

    /// Longer trials for numbers worth publishing:
    /// - 5 second trial duration
    /// - 100 warmup invocations
    pub fn thorough() -> Self {
        Self {
            trial_duration: Duration::from_secs(5),
            warmup: 100,
            ..Default::default()
        }
    }

    /// Apply `PERFCMP_THRESHOLD_PCT` and `PERFCMP_TRIAL_MS` on top of `default`.
    ///
    /// Unset variables leave the field alone. Unparsable or out-of-range values
    /// are logged and ignored.
    pub fn from_env_or(default: Self) -> Self {
        Self::from_lookup(default, |key| std::env::var(key).ok())
    }

    fn from_lookup(mut config: Self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup(THRESHOLD_ENV) {
            match raw.trim().parse::<f64>() {
                Ok(pct) if pct.is_finite() && pct >= 0.0 => config.threshold_percentage = pct,
                _ => tracing::warn!(var = THRESHOLD_ENV, value = %raw, "ignoring invalid override"),
            }
        }
        if let Some(raw) = lookup(TRIAL_MS_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.trial_duration = Duration::from_millis(ms),
                Err(_) => tracing::warn!(var = TRIAL_MS_ENV, value = %raw, "ignoring invalid override"),
            }
        }
        config
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the normalization threshold percentage.
    pub fn threshold_percentage(mut self, pct: f64) -> Self {
        assert!(
            pct.is_finite() && pct >= 0.0,
            "threshold_percentage must be finite and non-negative"
        );
        self.threshold_percentage = pct;
        self
    }

    /// Set the default trial duration.
    pub fn trial_duration(mut self, duration: Duration) -> Self {
        self.trial_duration = duration;
        self
    }

    /// Set the default trial duration in milliseconds.
    pub fn trial_duration_ms(mut self, ms: u64) -> Self {
        self.trial_duration = Duration::from_millis(ms);
        self
    }

    /// Set the number of warmup invocations.
    pub fn warmup(mut self, iterations: usize) -> Self {
        self.warmup = iterations;
        self
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold_percentage.is_finite() || self.threshold_percentage < 0.0 {
            return Err(Error::InvalidConfig(
                "threshold_percentage must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }
}
