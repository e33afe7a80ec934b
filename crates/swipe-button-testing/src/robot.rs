//! Robot harness for end-to-end swipe button tests
//!
//! The robot attaches a real [`SwipeButton`] to in-memory host capabilities
//! and a virtual clock, then lets tests press, drag and release the handle
//! the way a user would.
//!
//! # Example
//!
//! ```
//! use swipe_button_testing::SwipeRobot;
//! use swipe_button_ui::{SwipeButtonOptions, TrackMetrics};
//!
//! let options = SwipeButtonOptions::new().with_target_url("/next");
//! let robot = SwipeRobot::launch(options, TrackMetrics::new(300.0, 60.0, 10.0));
//!
//! robot.swipe(0.0, 400.0);
//! robot.settle();
//!
//! assert_eq!(robot.navigator.visits(), vec!["/next".to_string()]);
//! ```

use crate::fakes::{FakeEventHost, FakeView, RecordingAnalytics, RecordingNavigator};
use std::rc::Rc;
use swipe_button_core::{Duration, TimerQueue};
use swipe_button_foundation::{HitTarget, PointerEvent, PointerEventKind, TouchPoint, TrackMetrics};
use swipe_button_graphics::Point;
use swipe_button_ui::{
    EventSource, EventType, HostServices, MountError, NativeEvent, SwipeButton, SwipeButtonOptions,
};

const HANDLE: HitTarget = HitTarget {
    on_handle: true,
    on_interactive: true,
};

/// Vertical position used for synthesized events; the widget ignores it.
const POINTER_Y: f32 = 20.0;

pub struct SwipeRobot {
    pub host: Rc<FakeEventHost>,
    pub timers: Rc<TimerQueue>,
    pub view: FakeView,
    pub navigator: Rc<RecordingNavigator>,
    pub analytics: Option<Rc<RecordingAnalytics>>,
    button: SwipeButton,
}

impl SwipeRobot {
    /// Attach a button whose track measures as `metrics`, without analytics.
    pub fn launch(options: SwipeButtonOptions, metrics: TrackMetrics) -> Self {
        Self::build(options, Some(metrics), None)
    }

    /// Attach a button that reports through a [`RecordingAnalytics`].
    pub fn launch_with_analytics(options: SwipeButtonOptions, metrics: TrackMetrics) -> Self {
        Self::build(options, Some(metrics), Some(Rc::new(RecordingAnalytics::new())))
    }

    /// Attach a button whose view cannot be measured yet.
    pub fn launch_unmeasured(options: SwipeButtonOptions) -> Self {
        Self::build(options, None, None)
    }

    /// Attach a button to `view` and `host`, handing back the mount error
    /// instead of panicking.
    pub fn try_launch(
        options: SwipeButtonOptions,
        view: FakeView,
        host: Rc<FakeEventHost>,
    ) -> Result<Self, MountError> {
        Self::attach(options, view, host, None)
    }

    fn build(
        options: SwipeButtonOptions,
        metrics: Option<TrackMetrics>,
        analytics: Option<Rc<RecordingAnalytics>>,
    ) -> Self {
        let host = Rc::new(FakeEventHost::new());
        Self::attach(options, FakeView::new(metrics), host, analytics)
            .expect("fake view mounts")
    }

    fn attach(
        options: SwipeButtonOptions,
        view: FakeView,
        host: Rc<FakeEventHost>,
        analytics: Option<Rc<RecordingAnalytics>>,
    ) -> Result<Self, MountError> {
        let timers = Rc::new(TimerQueue::new());
        let navigator = Rc::new(RecordingNavigator::new());

        let mut services = HostServices::new(host.clone(), timers.clone(), navigator.clone());
        if let Some(analytics) = &analytics {
            services = services.with_analytics(analytics.clone());
        }
        let button = SwipeButton::attach(options, Box::new(view.clone()), &services)?;

        Ok(Self {
            host,
            timers,
            view,
            navigator,
            analytics,
            button,
        })
    }

    pub fn button(&self) -> &SwipeButton {
        &self.button
    }

    pub fn destroy(&mut self) {
        self.button.destroy();
    }

    /// Consume the robot, dropping the button while the fakes stay inspectable.
    pub fn into_parts(self) -> (Rc<FakeEventHost>, Rc<TimerQueue>, FakeView, Rc<RecordingNavigator>) {
        let Self {
            host,
            timers,
            view,
            navigator,
            button,
            ..
        } = self;
        drop(button);
        (host, timers, view, navigator)
    }

    // --- mouse ---

    pub fn press(&self, x: f32) -> PointerEvent {
        self.press_on(x, HANDLE)
    }

    pub fn press_on(&self, x: f32, target: HitTarget) -> PointerEvent {
        let event = PointerEvent::mouse(PointerEventKind::Down, x, POINTER_Y).with_target(target);
        self.dispatch_pointer(EventSource::Track, EventType::MouseDown, event)
    }

    pub fn move_to(&self, x: f32) -> PointerEvent {
        let event = PointerEvent::mouse(PointerEventKind::Move, x, POINTER_Y);
        self.dispatch_pointer(EventSource::Document, EventType::MouseMove, event)
    }

    pub fn release(&self, x: f32) -> PointerEvent {
        let event = PointerEvent::mouse(PointerEventKind::Up, x, POINTER_Y);
        self.dispatch_pointer(EventSource::Document, EventType::MouseUp, event)
    }

    pub fn click(&self, target: HitTarget) -> PointerEvent {
        let event = PointerEvent::mouse(PointerEventKind::Click, 0.0, POINTER_Y).with_target(target);
        self.dispatch_pointer(EventSource::Track, EventType::Click, event)
    }

    /// Press at `from`, move straight to `to`, release there.
    pub fn swipe(&self, from: f32, to: f32) {
        self.press(from);
        self.move_to(to);
        self.release(to);
    }

    // --- touch ---

    pub fn touch_start(&self, x: f32) -> PointerEvent {
        let event = PointerEvent::touch(PointerEventKind::Down, [touch(x)]).with_target(HANDLE);
        self.dispatch_pointer(EventSource::Track, EventType::TouchStart, event)
    }

    pub fn touch_move(&self, x: f32) -> PointerEvent {
        let event = PointerEvent::touch(PointerEventKind::Move, [touch(x)]);
        self.dispatch_pointer(EventSource::Document, EventType::TouchMove, event)
    }

    pub fn touch_end(&self, x: f32) -> PointerEvent {
        let event = PointerEvent::touch(PointerEventKind::Up, [touch(x)]);
        self.dispatch_pointer(EventSource::Document, EventType::TouchEnd, event)
    }

    // --- host ---

    /// Change what the view measures and fire a window resize.
    pub fn resize(&self, metrics: Option<TrackMetrics>) -> usize {
        self.view.set_metrics(metrics);
        self.host
            .dispatch(EventSource::Window, EventType::Resize, &NativeEvent::Resize)
    }

    /// Advance the virtual clock, firing due timers.
    pub fn advance(&self, by: Duration) -> usize {
        self.timers.advance(by)
    }

    /// Fire every pending timer.
    pub fn settle(&self) -> usize {
        self.timers.run_until_idle()
    }

    fn dispatch_pointer(&self, source: EventSource, ty: EventType, event: PointerEvent) -> PointerEvent {
        self.host
            .dispatch(source, ty, &NativeEvent::Pointer(event.clone()));
        event
    }
}

fn touch(x: f32) -> TouchPoint {
    TouchPoint::new(0, Point::new(x, POINTER_Y))
}
