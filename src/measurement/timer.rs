//! Wall-clock timing of single invocations.

use std::time::{Duration, Instant};

use super::store::SampleStore;

pub use std::hint::black_box;

/// Convert a duration to fractional milliseconds.
#[inline]
pub fn duration_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}

/// Time one call of `f` and return its duration in milliseconds.
///
/// The return value of `f` is passed through `black_box` and discarded.
#[inline]
pub fn time_ms<F, T>(f: F) -> f64
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    black_box(f());
    duration_ms(start.elapsed())
}

/// A running measurement that records itself into a [`SampleStore`] when stopped.
///
/// Created by [`SampleStore::start`]. Dropping it without calling
/// [`stop`](Stopwatch::stop) discards the measurement.
#[must_use = "a Stopwatch records nothing until stop() is called"]
#[derive(Debug)]
pub struct Stopwatch<'a> {
    store: &'a mut SampleStore,
    name: &'a str,
    start: Instant,
}

impl<'a> Stopwatch<'a> {
    pub(crate) fn start(store: &'a mut SampleStore, name: &'a str) -> Self {
        Self {
            store,
            name,
            start: Instant::now(),
        }
    }

    /// Milliseconds since the stopwatch started.
    pub fn elapsed_ms(&self) -> f64 {
        duration_ms(self.start.elapsed())
    }

    /// Record the elapsed time as one sample and return it in milliseconds.
    pub fn stop(self) -> f64 {
        let elapsed = self.elapsed_ms();
        self.store.record(self.name, elapsed);
        elapsed
    }
}
