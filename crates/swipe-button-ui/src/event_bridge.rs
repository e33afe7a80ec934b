//! Routes host events into the swipe tracker.
//!
//! Presses arrive from the track, moves and releases from the document root,
//! resizes from the window. The bridge keeps the handle position in the view
//! in sync with the tracker and hands completed gestures to the debounced
//! goal action.

use crate::host::NativeEvent;
use crate::view::{MountError, SwipeView};
use std::cell::RefCell;
use swipe_button_core::DelayedCall;
use swipe_button_foundation::{
    GestureConfig, GestureState, GoalReached, PointerEvent, PointerEventKind, SwipeGesture,
    SwipeOutcome, TravelBounds,
};

pub struct EventBridge {
    gesture: RefCell<SwipeGesture>,
    view: RefCell<Box<dyn SwipeView>>,
    on_goal: DelayedCall<GoalReached>,
}

impl EventBridge {
    pub fn new(
        config: GestureConfig,
        view: Box<dyn SwipeView>,
        on_goal: DelayedCall<GoalReached>,
    ) -> Self {
        Self {
            gesture: RefCell::new(SwipeGesture::new(config)),
            view: RefCell::new(view),
            on_goal,
        }
    }

    pub fn gesture_state(&self) -> GestureState {
        self.gesture.borrow().state()
    }

    pub fn bounds(&self) -> TravelBounds {
        self.gesture.borrow().bounds()
    }

    pub fn has_pending_goal(&self) -> bool {
        self.on_goal.is_pending()
    }

    pub fn cancel_pending_goal(&self) -> bool {
        self.on_goal.cancel()
    }

    pub fn mount(&self) -> Result<(), MountError> {
        self.view.borrow_mut().mount()
    }

    /// Abandons any gesture in flight and removes the view.
    pub fn unmount(&self) {
        self.gesture.borrow_mut().cancel();
        let mut view = self.view.borrow_mut();
        view.render_offset(0.0);
        view.unmount();
    }

    pub fn handle(&self, event: &NativeEvent) {
        match event {
            NativeEvent::Resize => {
                self.refresh_bounds();
            }
            NativeEvent::Pointer(pointer) => match pointer.kind {
                PointerEventKind::Down => self.on_press(pointer),
                PointerEventKind::Move => self.on_move(pointer),
                PointerEventKind::Up => self.on_release(pointer),
                PointerEventKind::Click => self.on_click(pointer),
            },
        }
    }

    /// Re-measures the track. An unmeasurable layout keeps the last bounds.
    pub fn refresh_bounds(&self) -> TravelBounds {
        let metrics = self.view.borrow().measure();
        let mut gesture = self.gesture.borrow_mut();
        if let Some(metrics) = metrics {
            let bounds = TravelBounds::from_metrics(metrics);
            log::debug!("track measured, max travel {}", bounds.max_travel());
            gesture.set_bounds(bounds);
        } else {
            log::debug!("track not measurable yet");
        }
        gesture.bounds()
    }

    fn on_click(&self, event: &PointerEvent) {
        if event.target.on_interactive {
            event.prevent_default();
        }
    }

    fn on_press(&self, event: &PointerEvent) {
        event.stop_propagation();
        if event.target.on_interactive {
            event.prevent_default();
        }
        let Some(x) = event.client_x() else {
            return;
        };
        self.gesture.borrow_mut().press(x, event.target.on_handle);
    }

    fn on_move(&self, event: &PointerEvent) {
        event.stop_propagation();
        let Some(x) = event.client_x() else {
            return;
        };
        let outcome = self.gesture.borrow_mut().drag_to(x);
        self.apply(outcome);
    }

    fn on_release(&self, event: &PointerEvent) {
        event.stop_propagation();
        if !self.gesture.borrow().is_active() {
            return;
        }
        let outcome = match event.client_x() {
            Some(x) => self.gesture.borrow_mut().release(x),
            None => {
                self.gesture.borrow_mut().cancel();
                SwipeOutcome::Abandoned
            }
        };
        self.apply(outcome);
    }

    fn apply(&self, outcome: SwipeOutcome) {
        match outcome {
            SwipeOutcome::Ignored | SwipeOutcome::Started => {}
            SwipeOutcome::Dragged { offset } => self.view.borrow_mut().render_offset(offset),
            SwipeOutcome::Abandoned => self.view.borrow_mut().render_offset(0.0),
            SwipeOutcome::Goal(goal) => {
                self.view.borrow_mut().render_offset(0.0);
                self.on_goal.call(goal);
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/event_bridge_tests.rs"]
mod tests;
