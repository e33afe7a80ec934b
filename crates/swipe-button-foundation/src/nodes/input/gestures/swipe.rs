//! Swipe-to-confirm gesture recogniser.
//!
//! Tracks one horizontal drag of the handle from press to release. The
//! rendered offset is clamped to the track, and a gesture completes either by
//! dragging the handle to the end of the track or by releasing after moving
//! at least `release_threshold` pixels. The release check uses the raw,
//! unclamped displacement, so a flick that overshoots a short track still
//! counts even though the handle saturated earlier.
//!
//! A completed gesture yields exactly one [`GoalReached`]. Reaching the end
//! returns the tracker to idle immediately, so the release that follows is
//! ignored.

use crate::gesture_constants::DEFAULT_RELEASE_THRESHOLD;
use crate::travel_bounds::TravelBounds;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Minimum raw displacement at release that counts as success.
    pub release_threshold: f32,
}

impl GestureConfig {
    pub fn new(release_threshold: f32) -> Self {
        Self { release_threshold }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RELEASE_THRESHOLD)
    }
}

/// Live state of one drag attempt.
///
/// `origin_x` is present exactly while a gesture is active.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureState {
    origin_x: Option<f32>,
    current_offset: f32,
}

impl GestureState {
    pub fn is_active(&self) -> bool {
        self.origin_x.is_some()
    }

    pub fn origin_x(&self) -> Option<f32> {
        self.origin_x
    }

    pub fn current_offset(&self) -> f32 {
        self.current_offset
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipeInput {
    Press { x: f32, on_handle: bool },
    Move { x: f32 },
    Release { x: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GoalTrigger {
    /// The handle reached the end of the track while dragging.
    DragToEnd,
    /// The pointer was released past the threshold.
    Release,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoalReached {
    pub trigger: GoalTrigger,
    /// Raw displacement from the press origin when the goal fired.
    pub displacement: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipeOutcome {
    /// The input did not apply to the current state.
    Ignored,
    /// A press on the handle started a gesture.
    Started,
    /// The handle moved; `offset` is the clamped position to render.
    Dragged { offset: f32 },
    /// The gesture completed and the tracker is idle again.
    Goal(GoalReached),
    /// The gesture ended without reaching the goal.
    Abandoned,
}

impl SwipeOutcome {
    pub fn goal(&self) -> Option<GoalReached> {
        match self {
            SwipeOutcome::Goal(goal) => Some(*goal),
            _ => None,
        }
    }

    /// Whether this outcome returned an active gesture to idle.
    pub fn ends_gesture(&self) -> bool {
        matches!(self, SwipeOutcome::Goal(_) | SwipeOutcome::Abandoned)
    }
}

#[derive(Clone, Debug, Default)]
pub struct SwipeGesture {
    state: GestureState,
    bounds: TravelBounds,
    config: GestureConfig,
}

impl SwipeGesture {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            state: GestureState::default(),
            bounds: TravelBounds::Unmeasured,
            config,
        }
    }

    pub fn with_bounds(mut self, bounds: TravelBounds) -> Self {
        self.set_bounds(bounds);
        self
    }

    pub fn config(&self) -> GestureConfig {
        self.config
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn bounds(&self) -> TravelBounds {
        self.bounds
    }

    pub fn offset(&self) -> f32 {
        self.state.current_offset
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Replaces the travel bounds. A gesture in flight keeps going; its
    /// offset is pulled back inside the new bounds.
    pub fn set_bounds(&mut self, bounds: TravelBounds) {
        self.bounds = bounds;
        self.state.current_offset = bounds.clamp(self.state.current_offset);
    }

    pub fn handle(&mut self, input: SwipeInput) -> SwipeOutcome {
        match input {
            SwipeInput::Press { x, on_handle } => {
                if self.press(x, on_handle) {
                    SwipeOutcome::Started
                } else {
                    SwipeOutcome::Ignored
                }
            }
            SwipeInput::Move { x } => self.drag_to(x),
            SwipeInput::Release { x } => self.release(x),
        }
    }

    /// Starts a gesture if the press landed on the handle and none is active.
    pub fn press(&mut self, x: f32, on_handle: bool) -> bool {
        if self.state.is_active() || !on_handle || !x.is_finite() {
            return false;
        }
        self.state.origin_x = Some(x);
        self.state.current_offset = 0.0;
        log::debug!("swipe started at x={x}");
        true
    }

    pub fn drag_to(&mut self, x: f32) -> SwipeOutcome {
        let Some(origin) = self.state.origin_x else {
            return SwipeOutcome::Ignored;
        };
        let raw = x - origin;
        let offset = self.bounds.clamp(raw);
        if self.bounds.is_goal(offset) {
            self.state.reset();
            log::debug!("swipe reached end of track, raw displacement {raw}");
            return SwipeOutcome::Goal(GoalReached {
                trigger: GoalTrigger::DragToEnd,
                displacement: raw,
            });
        }
        self.state.current_offset = offset;
        log::trace!("swipe offset {offset} (raw {raw})");
        SwipeOutcome::Dragged { offset }
    }

    pub fn release(&mut self, x: f32) -> SwipeOutcome {
        let Some(origin) = self.state.origin_x else {
            return SwipeOutcome::Ignored;
        };
        self.state.reset();
        let raw = x - origin;
        if raw >= self.config.release_threshold {
            log::debug!("swipe released past threshold, raw displacement {raw}");
            SwipeOutcome::Goal(GoalReached {
                trigger: GoalTrigger::Release,
                displacement: raw,
            })
        } else {
            log::debug!("swipe abandoned at raw displacement {raw}");
            SwipeOutcome::Abandoned
        }
    }

    /// Abandons the active gesture without evaluating the threshold, for
    /// releases that carry no usable coordinate.
    pub fn cancel(&mut self) -> bool {
        if !self.state.is_active() {
            return false;
        }
        self.state.reset();
        log::debug!("swipe cancelled");
        true
    }
}

#[cfg(test)]
#[path = "../../../tests/swipe_gesture_tests.rs"]
mod tests;
