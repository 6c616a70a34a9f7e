//! Finite-state value stamped with the time it was entered.
//!
//! Every entity kind carries one of these, parameterised by its own closed
//! state enum, so the timestamp bookkeeping lives in exactly one place.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedState<S> {
    value: S,
    /// Timestamp (seconds) at which `value` was entered.
    start_time: f64,
    /// Seconds spent in `value` as of the last `tick`.
    elapsed: f64,
}

impl<S: Copy + PartialEq> TimedState<S> {
    /// Enter `value` at `now`.
    pub fn new(value: S, now: f64) -> Self {
        Self {
            value,
            start_time: now,
            elapsed: 0.0,
        }
    }

    /// Transition to `value`. The clock restarts only when the value
    /// actually changes; re-entering the current value is a no-op.
    /// Returns whether a transition happened.
    pub fn set(&mut self, value: S, now: f64) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.start_time = now;
        self.elapsed = 0.0;
        true
    }

    /// Recompute the elapsed time against `now`.
    pub fn tick(&mut self, now: f64) {
        self.elapsed = (now - self.start_time).max(0.0);
    }

    pub fn value(&self) -> S {
        self.value
    }

    pub fn is(&self, value: S) -> bool {
        self.value == value
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
