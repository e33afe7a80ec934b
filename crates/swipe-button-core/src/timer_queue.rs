//! Host-driven timer queue.
//!
//! `TimerQueue` keeps its own virtual clock that only moves when the host
//! advances it, the same way frame callbacks are drained with an explicit
//! frame time. Hosts without a native timer facility (and all tests) pump it
//! from their event loop.

use crate::platform::{TimerId, TimerScheduler};
use std::cell::RefCell;
use web_time::Duration;

struct PendingTimer {
    id: TimerId,
    due: Duration,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct TimerQueueState {
    now: Duration,
    next_id: TimerId,
    pending: Vec<PendingTimer>,
}

#[derive(Default)]
pub struct TimerQueue {
    state: RefCell<TimerQueueState>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time, measured from queue creation.
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of armed timers.
    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Due time of the earliest armed timer.
    pub fn next_due(&self) -> Option<Duration> {
        self.state.borrow().pending.iter().map(|t| t.due).min()
    }

    /// Moves the clock forward by `by` and fires every timer that became due.
    /// Returns the number of callbacks invoked.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        self.advance_to(target)
    }

    /// Moves the clock to `target` (never backwards) and fires due timers in
    /// due-time order, ties broken by scheduling order.
    pub fn advance_to(&self, target: Duration) -> usize {
        let mut fired = 0;
        while let Some(timer) = self.pop_due(target) {
            (timer.callback)();
            fired += 1;
        }
        let mut state = self.state.borrow_mut();
        if target > state.now {
            state.now = target;
        }
        fired
    }

    /// Fires timers until none are left, including ones armed by callbacks.
    pub fn run_until_idle(&self) -> usize {
        let mut fired = 0;
        while let Some(due) = self.next_due() {
            fired += self.advance_to(due);
        }
        fired
    }

    fn pop_due(&self, target: Duration) -> Option<PendingTimer> {
        let mut state = self.state.borrow_mut();
        let index = state
            .pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= target)
            .min_by_key(|(_, timer)| (timer.due, timer.id))
            .map(|(index, _)| index)?;
        let timer = state.pending.remove(index);
        if timer.due > state.now {
            state.now = timer.due;
        }
        Some(timer)
    }
}

impl TimerScheduler for TimerQueue {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        let due = state.now + delay;
        state.pending.push(PendingTimer { id, due, callback });
        id
    }

    fn cancel(&self, id: TimerId) {
        self.state.borrow_mut().pending.retain(|timer| timer.id != id);
    }
}

#[cfg(test)]
#[path = "tests/timer_queue_tests.rs"]
mod tests;
