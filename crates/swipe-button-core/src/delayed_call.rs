//! Trailing debounce over a [`TimerScheduler`].
//!
//! Every [`DelayedCall::call`] disarms the previously armed timer and arms a
//! fresh one, so a burst of calls closer together than the delay collapses
//! into a single invocation that receives the arguments of the last call.

use crate::platform::{TimerId, TimerScheduler};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_time::Duration;

struct DelayedState<A> {
    timer: Option<TimerId>,
    args: Option<A>,
}

pub struct DelayedCall<A> {
    scheduler: Rc<dyn TimerScheduler>,
    delay: Duration,
    action: Rc<dyn Fn(A)>,
    state: Rc<RefCell<DelayedState<A>>>,
}

impl<A: 'static> DelayedCall<A> {
    pub fn new(
        scheduler: Rc<dyn TimerScheduler>,
        delay: Duration,
        action: impl Fn(A) + 'static,
    ) -> Self {
        Self {
            scheduler,
            delay,
            action: Rc::new(action),
            state: Rc::new(RefCell::new(DelayedState {
                timer: None,
                args: None,
            })),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules the action with `args`, replacing any pending invocation.
    pub fn call(&self, args: A) {
        let previous = {
            let mut state = self.state.borrow_mut();
            state.args = Some(args);
            state.timer.take()
        };
        if let Some(previous) = previous {
            log::trace!("delayed call re-armed, dropping timer {previous}");
            self.scheduler.cancel(previous);
        }

        let state = Rc::downgrade(&self.state);
        let action = Rc::clone(&self.action);
        let id = self
            .scheduler
            .schedule(self.delay, Box::new(move || fire(&state, &*action)));
        self.state.borrow_mut().timer = Some(id);
    }

    /// Drops the pending invocation, if any. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        let timer = {
            let mut state = self.state.borrow_mut();
            state.args = None;
            state.timer.take()
        };
        match timer {
            Some(id) => {
                self.scheduler.cancel(id);
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state.borrow().timer.is_some()
    }
}

fn fire<A>(state: &Weak<RefCell<DelayedState<A>>>, action: &dyn Fn(A)) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let args = {
        let mut state = state.borrow_mut();
        state.timer = None;
        state.args.take()
    };
    if let Some(args) = args {
        action(args);
    }
}

#[cfg(test)]
#[path = "tests/delayed_call_tests.rs"]
mod tests;
