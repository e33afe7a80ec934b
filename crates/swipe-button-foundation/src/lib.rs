//! Pointer input and gesture tracking for the swipe button

pub mod gesture_constants;
pub mod nodes;
pub mod travel_bounds;

pub use gesture_constants::*;
pub use nodes::input::*;
pub use travel_bounds::{TrackMetrics, TravelBounds};

pub use swipe_button_graphics::{EdgeInsets, Point, Size};

pub mod prelude {
    pub use crate::nodes::input::gestures::{
        GestureConfig, GestureState, GoalReached, GoalTrigger, SwipeGesture, SwipeInput,
        SwipeOutcome,
    };
    pub use crate::nodes::input::prelude::*;
    pub use crate::travel_bounds::{TrackMetrics, TravelBounds};
}
