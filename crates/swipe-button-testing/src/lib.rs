//! Testing utilities and harness for the swipe button
//!
//! In-memory stand-ins for every host capability plus a robot that drives a
//! real [`SwipeButton`](swipe_button_ui::SwipeButton) through them on a
//! virtual clock.

pub mod fakes;
pub mod robot;

pub use fakes::*;
pub use robot::*;

pub mod prelude {
    pub use crate::fakes::{
        AnalyticsCall, FakeEventHost, FakeView, RecordingAnalytics, RecordingNavigator,
    };
    pub use crate::robot::SwipeRobot;
}
