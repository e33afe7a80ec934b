//! Swipe-to-confirm button.
//!
//! A button that only fires after the user drags its handle horizontally
//! across the track. The widget is assembled from host capabilities (a
//! [`SwipeView`], an [`EventHost`], a timer scheduler, a [`Navigator`] and an
//! optional [`AnalyticsSink`]) so the gesture logic never touches a concrete
//! UI toolkit.

pub mod action;
pub mod analytics;
pub mod class_names;
pub mod event_bridge;
pub mod host;
pub mod navigation;
pub mod options;
pub mod view;
pub mod widgets;

pub use action::GoalAction;
pub use analytics::AnalyticsSink;
pub use event_bridge::EventBridge;
pub use host::{EventHost, EventSource, EventType, HostServices, Listener, NativeEvent};
pub use navigation::Navigator;
pub use options::{HostMarkup, OptionsError, SwipeButtonOptions};
pub use view::{MountError, SwipeView};
pub use widgets::SwipeButton;

pub use swipe_button_core::{Duration, Subscription, TimerQueue, TimerScheduler};
pub use swipe_button_foundation::{
    GestureConfig, GestureState, GoalReached, GoalTrigger, HitTarget, PointerEvent,
    PointerEventKind, TouchPoint, TrackMetrics, TravelBounds,
};

pub mod prelude {
    pub use crate::analytics::AnalyticsSink;
    pub use crate::host::{EventHost, EventSource, EventType, HostServices, NativeEvent};
    pub use crate::navigation::Navigator;
    pub use crate::options::{HostMarkup, SwipeButtonOptions};
    pub use crate::view::{MountError, SwipeView};
    pub use crate::widgets::SwipeButton;
}
