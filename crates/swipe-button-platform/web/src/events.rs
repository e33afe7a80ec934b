//! DOM-backed [`EventHost`].

use crate::WebPlatform;
use std::rc::Rc;
use swipe_button_core::Subscription;
use swipe_button_ui::{EventHost, EventSource, EventType, Listener, NativeEvent};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

type DomCallback = Closure<dyn FnMut(Event)>;

/// Listens on the widget's track, the document root and the window.
///
/// Each registration owns its `Closure`; releasing the subscription removes
/// the DOM listener and frees it.
pub struct DomEventHost {
    track: EventTarget,
    document: EventTarget,
    window: EventTarget,
    platform: WebPlatform,
}

impl DomEventHost {
    pub fn new(track: EventTarget, document: EventTarget, window: EventTarget) -> Self {
        Self {
            track,
            document,
            window,
            platform: WebPlatform::new(),
        }
    }

    fn target(&self, source: EventSource) -> &EventTarget {
        match source {
            EventSource::Track => &self.track,
            EventSource::Document => &self.document,
            EventSource::Window => &self.window,
        }
    }

    fn callback(&self, event_type: EventType, listener: Listener) -> DomCallback {
        let platform = self.platform;
        Closure::wrap(Box::new(move |event: Event| {
            if event_type.pointer_kind().is_none() {
                listener(&NativeEvent::Resize);
                return;
            }
            let Some(pointer) = platform.pointer_event(event_type, &event) else {
                log::trace!("ignoring unrecognised {} event", event_type.dom_name());
                return;
            };
            listener(&NativeEvent::Pointer(pointer.clone()));
            platform.apply_flags(&pointer, &event);
        }) as Box<dyn FnMut(_)>)
    }
}

impl EventHost for DomEventHost {
    fn listen(&self, source: EventSource, types: &[EventType], listener: Listener) -> Subscription {
        let target = self.target(source).clone();
        let mut registered: Vec<(EventType, DomCallback)> = Vec::with_capacity(types.len());
        for &event_type in types {
            let callback = self.callback(event_type, Rc::clone(&listener));
            match target
                .add_event_listener_with_callback(event_type.dom_name(), callback.as_ref().unchecked_ref())
            {
                Ok(()) => registered.push((event_type, callback)),
                Err(err) => log::error!(
                    "failed to listen for {} on {source:?}: {err:?}",
                    event_type.dom_name()
                ),
            }
        }

        if registered.is_empty() {
            return Subscription::inactive();
        }
        Subscription::new(move || {
            for (event_type, callback) in registered {
                if let Err(err) = target.remove_event_listener_with_callback(
                    event_type.dom_name(),
                    callback.as_ref().unchecked_ref(),
                ) {
                    log::error!("failed to remove {} listener: {err:?}", event_type.dom_name());
                }
            }
        })
    }
}
