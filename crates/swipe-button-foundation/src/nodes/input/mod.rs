pub mod gestures;
pub mod types;

pub use gestures::{
    GestureConfig, GestureState, GoalReached, GoalTrigger, SwipeGesture, SwipeInput, SwipeOutcome,
};
pub use types::{
    HitTarget, PointerCoordinates, PointerEvent, PointerEventKind, PointerSource, TouchPoint,
};

pub mod prelude {
    pub use super::types::{
        HitTarget, PointerCoordinates, PointerEvent, PointerEventKind, PointerSource, TouchPoint,
    };
}
