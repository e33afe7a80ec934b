//! Event-source capability of the host.
//!
//! The widget listens on three sources: the track (presses and clicks), the
//! document root (moves and releases, so a drag that leaves the handle keeps
//! being tracked) and the window (resizes).

use crate::analytics::AnalyticsSink;
use crate::navigation::Navigator;
use std::rc::Rc;
use swipe_button_core::{Subscription, TimerScheduler};
use swipe_button_foundation::{PointerEvent, PointerEventKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventSource {
    Track,
    Document,
    Window,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    MouseDown,
    TouchStart,
    MouseMove,
    TouchMove,
    MouseUp,
    TouchEnd,
    Click,
    Resize,
}

impl EventType {
    pub const PRESS: [EventType; 2] = [EventType::MouseDown, EventType::TouchStart];
    pub const MOVE: [EventType; 2] = [EventType::MouseMove, EventType::TouchMove];
    pub const RELEASE: [EventType; 2] = [EventType::MouseUp, EventType::TouchEnd];

    pub const ALL: [EventType; 8] = [
        EventType::MouseDown,
        EventType::TouchStart,
        EventType::MouseMove,
        EventType::TouchMove,
        EventType::MouseUp,
        EventType::TouchEnd,
        EventType::Click,
        EventType::Resize,
    ];

    /// DOM event name.
    pub fn dom_name(self) -> &'static str {
        match self {
            EventType::MouseDown => "mousedown",
            EventType::TouchStart => "touchstart",
            EventType::MouseMove => "mousemove",
            EventType::TouchMove => "touchmove",
            EventType::MouseUp => "mouseup",
            EventType::TouchEnd => "touchend",
            EventType::Click => "click",
            EventType::Resize => "resize",
        }
    }

    pub fn from_dom_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.dom_name() == name)
    }

    /// Pointer phase the event maps to; `None` for layout events.
    pub fn pointer_kind(self) -> Option<PointerEventKind> {
        match self {
            EventType::MouseDown | EventType::TouchStart => Some(PointerEventKind::Down),
            EventType::MouseMove | EventType::TouchMove => Some(PointerEventKind::Move),
            EventType::MouseUp | EventType::TouchEnd => Some(PointerEventKind::Up),
            EventType::Click => Some(PointerEventKind::Click),
            EventType::Resize => None,
        }
    }

    pub fn is_touch(self) -> bool {
        matches!(
            self,
            EventType::TouchStart | EventType::TouchMove | EventType::TouchEnd
        )
    }
}

#[derive(Clone, Debug)]
pub enum NativeEvent {
    Pointer(PointerEvent),
    Resize,
}

pub type Listener = Rc<dyn Fn(&NativeEvent)>;

pub trait EventHost {
    /// Registers `listener` for every type in `types` on `source`. Releasing
    /// the returned subscription removes all of them.
    fn listen(&self, source: EventSource, types: &[EventType], listener: Listener) -> Subscription;
}

/// Everything a swipe button needs from its host.
#[derive(Clone)]
pub struct HostServices {
    pub events: Rc<dyn EventHost>,
    pub timers: Rc<dyn TimerScheduler>,
    pub navigator: Rc<dyn Navigator>,
    /// `None` disables reporting; navigation still happens.
    pub analytics: Option<Rc<dyn AnalyticsSink>>,
}

impl HostServices {
    pub fn new(
        events: Rc<dyn EventHost>,
        timers: Rc<dyn TimerScheduler>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            events,
            timers,
            navigator,
            analytics: None,
        }
    }

    pub fn with_analytics(mut self, analytics: Rc<dyn AnalyticsSink>) -> Self {
        self.analytics = Some(analytics);
        self
    }
}
