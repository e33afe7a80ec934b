//! Platform abstraction traits for host timer services.
//!
//! The swipe button delegates deferred work to the host so it can run on a
//! browser event loop (`setTimeout`) as well as on a host-driven virtual
//! clock in tests. Everything runs on one logical thread, so implementations
//! are not required to be `Send` or `Sync`.

use web_time::Duration;

/// Identifier returned by [`TimerScheduler::schedule`].
pub type TimerId = u64;

/// Schedules one-shot callbacks on the host.
pub trait TimerScheduler {
    /// Arms a timer that invokes `callback` once after `delay`.
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId;

    /// Disarms a timer. Unknown or already fired ids are ignored.
    fn cancel(&self, id: TimerId);
}
