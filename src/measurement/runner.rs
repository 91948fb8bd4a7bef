//! Duration-boxed trial runs.
//!
//! A trial repeatedly times a caller-supplied operation until a wall-clock
//! budget is used up. The budget is checked after each invocation only, so a
//! positive budget always gets one sample and the final invocation completes
//! even when it overruns.

use std::time::{Duration, Instant};

use super::store::SampleStore;
use super::timer::{black_box, time_ms};

/// Runs time-boxed trials and feeds their samples into a [`SampleStore`].
#[derive(Debug, Clone, Default)]
pub struct TrialRunner {
    /// Number of untimed invocations before the timed loop.
    warmup_iterations: usize,
}

impl TrialRunner {
    /// Create a runner with the given warmup iterations.
    pub fn new(warmup_iterations: usize) -> Self {
        Self { warmup_iterations }
    }

    /// Number of untimed invocations run before each trial.
    pub fn warmup_iterations(&self) -> usize {
        self.warmup_iterations
    }

    fn warmup<F, T>(&self, operation: &mut F)
    where
        F: FnMut() -> T,
    {
        for _ in 0..self.warmup_iterations {
            black_box(operation());
        }
    }

    /// Time `operation` repeatedly for `budget`, recording each invocation under `name`.
    ///
    /// The budget is stored against `name` for throughput. Any positive budget
    /// yields at least one sample, however short; a zero budget yields none.
    /// The operation's return value is ignored.
    pub fn run<F, T>(&self, store: &mut SampleStore, name: &str, budget: Duration, mut operation: F)
    where
        F: FnMut() -> T,
    {
        store.set_trial_duration(name, budget);
        if budget.is_zero() {
            tracing::debug!(benchmark = name, "zero budget, trial skipped");
            return;
        }
        self.warmup(&mut operation);

        let start = Instant::now();
        let mut invocations = 0usize;

        loop {
            let ms = time_ms(&mut operation);
            store.record(name, ms);
            invocations += 1;
            if start.elapsed() >= budget {
                break;
            }
        }

        tracing::debug!(
            benchmark = name,
            invocations,
            elapsed_ms = start.elapsed().as_secs_f64() * 1_000.0,
            budget_ms = budget.as_secs_f64() * 1_000.0,
            "trial finished"
        );
    }
}
