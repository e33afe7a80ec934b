pub mod swipe;

pub use swipe::{
    GestureConfig, GestureState, GoalReached, GoalTrigger, SwipeGesture, SwipeInput, SwipeOutcome,
};
