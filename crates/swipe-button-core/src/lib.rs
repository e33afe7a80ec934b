//! Host-service plumbing for the swipe button.
//!
//! The widget never talks to a browser or an event loop directly. Timers and
//! listener registrations are expressed through the small abstractions in
//! this crate so the same logic runs under wasm and in plain unit tests.

mod delayed_call;
pub mod platform;
mod subscription;
mod timer_queue;

pub use delayed_call::DelayedCall;
pub use platform::{TimerId, TimerScheduler};
pub use subscription::{Subscription, SubscriptionSet};
pub use timer_queue::TimerQueue;

pub use web_time::Duration;

pub mod prelude {
    pub use crate::delayed_call::DelayedCall;
    pub use crate::platform::{TimerId, TimerScheduler};
    pub use crate::subscription::{Subscription, SubscriptionSet};
    pub use crate::timer_queue::TimerQueue;
}
