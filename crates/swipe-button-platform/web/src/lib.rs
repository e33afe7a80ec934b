//! Browser host for the swipe button.
//!
//! Every `.btn-swipe` control on the page can be replaced by a swipe button
//! with [`install_on_ready`]. The pieces are public so a page can also wire a
//! single control by hand.

mod events;
mod install;
mod metrika;
mod navigator;
mod timers;
mod view;

pub use events::DomEventHost;
pub use install::{destroy_all, install, install_all, install_on_ready, installed_count, read_markup};
pub use metrika::MetrikaSink;
pub use navigator::LocationNavigator;
pub use timers::WindowTimers;
pub use view::{parse_css_px, DomView};

use swipe_button_foundation::{HitTarget, PointerEvent, TouchPoint};
use swipe_button_graphics::Point;
use swipe_button_ui::{class_names, EventType};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, TouchEvent};

/// Converts DOM events into the widget's pointer model.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebPlatform;

impl WebPlatform {
    pub fn new() -> Self {
        Self
    }

    pub fn pointer_position(&self, x: i32, y: i32) -> Point {
        // client coordinates are already CSS pixels
        Point::new(x as f32, y as f32)
    }

    /// Normalises a DOM event received as `event_type`. Returns `None` for
    /// layout events and for events that are not mouse or touch events.
    pub fn pointer_event(&self, event_type: EventType, event: &Event) -> Option<PointerEvent> {
        let kind = event_type.pointer_kind()?;
        let pointer = if event_type.is_touch() {
            let changed = event.dyn_ref::<TouchEvent>()?.changed_touches();
            let touches = (0..changed.length()).filter_map(|index| changed.get(index));
            PointerEvent::touch(
                kind,
                touches.map(|touch| {
                    TouchPoint::new(
                        touch.identifier(),
                        self.pointer_position(touch.client_x(), touch.client_y()),
                    )
                }),
            )
        } else {
            let mouse = event.dyn_ref::<MouseEvent>()?;
            let position = self.pointer_position(mouse.client_x(), mouse.client_y());
            PointerEvent::mouse(kind, position.x, position.y)
        };
        Some(pointer.with_target(self.hit_target(event)))
    }

    /// Where `event` landed relative to the widget's own elements.
    pub fn hit_target(&self, event: &Event) -> HitTarget {
        let Some(element) = event.target().and_then(|target| target.dyn_into::<Element>().ok())
        else {
            return HitTarget::default();
        };
        HitTarget {
            on_handle: matches_ancestor(&element, &class_names::selector(class_names::TOGGLER)),
            on_interactive: matches_ancestor(&element, class_names::INTERACTIVE_SELECTOR),
        }
    }

    /// Copies the handler's decisions back onto the DOM event.
    pub fn apply_flags(&self, pointer: &PointerEvent, event: &Event) {
        if pointer.is_default_prevented() {
            event.prevent_default();
        }
        if pointer.is_propagation_stopped() {
            event.stop_propagation();
        }
    }
}

fn matches_ancestor(element: &Element, selector: &str) -> bool {
    match element.closest(selector) {
        Ok(found) => found.is_some(),
        Err(err) => {
            log::error!("closest({selector}) failed: {err:?}");
            false
        }
    }
}
