//! Double-click pairing with an injected clock.
//!
//! The host surface reports clicks on outline points; two clicks on the same
//! point inside the window count as one double click. Time is read through
//! the `Clock` port so the pairing logic can be tested, and replayed, without
//! real wall-clock delays.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Port supplying monotonic time to the detector
pub trait Clock {
    /// Time elapsed since an arbitrary fixed epoch
    fn now(&self) -> Duration;
}

/// Clock backed by `std::time::Instant`
#[derive(Debug, Clone)]
pub struct SystemClock {
    epoch: std::time::Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { epoch: std::time::Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// Deterministic clock for tests and scripted replay. Clones share the same
/// time, which advances only when told to.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Pairs successive clicks on the same outline point into double clicks
#[derive(Debug)]
pub struct DoubleClickDetector<C> {
    clock: C,
    window: Duration,
    last: Option<(usize, Duration)>,
}

impl<C: Clock> DoubleClickDetector<C> {
    pub fn new(clock: C, window: Duration) -> Self {
        Self { clock, window, last: None }
    }

    /// Record a click on point `index`. Returns true when it pairs with the
    /// previous click on the same index inside the window. The second click
    /// of a pair does not start a new pair.
    pub fn observe(&mut self, index: usize) -> bool {
        let at = self.clock.now();
        match self.last.take() {
            Some((last_index, last_at))
                if last_index == index && at.saturating_sub(last_at) <= self.window =>
            {
                true
            }
            _ => {
                self.last = Some((index, at));
                false
            }
        }
    }

    /// Forget the pending click, e.g. after the outline was re-indexed
    pub fn clear(&mut self) {
        self.last = None;
    }
}
