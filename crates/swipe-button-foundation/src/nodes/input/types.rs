use smallvec::SmallVec;
use std::cell::Cell;
use std::rc::Rc;
use swipe_button_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Click,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub identifier: i32,
    pub client: Point,
}

impl TouchPoint {
    pub fn new(identifier: i32, client: Point) -> Self {
        Self { identifier, client }
    }
}

/// Client coordinates carried by a native event.
///
/// Mouse events report their own position; touch events report the touch
/// points that changed with this event.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerCoordinates {
    Mouse(Point),
    Touch(SmallVec<[TouchPoint; 2]>),
}

impl PointerCoordinates {
    pub fn source(&self) -> PointerSource {
        match self {
            PointerCoordinates::Mouse(_) => PointerSource::Mouse,
            PointerCoordinates::Touch(_) => PointerSource::Touch,
        }
    }

    /// The single point the widget tracks: the mouse position, or the first
    /// changed touch. Only one contact is ever followed.
    pub fn primary(&self) -> Option<Point> {
        match self {
            PointerCoordinates::Mouse(point) => Some(*point),
            PointerCoordinates::Touch(touches) => touches.first().map(|touch| touch.client),
        }
    }
}

/// Where the event landed relative to the widget's own elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HitTarget {
    /// The target is the draggable handle or one of its descendants.
    pub on_handle: bool,
    /// The target is (inside) a link or button nested in the control.
    pub on_interactive: bool,
}

#[derive(Default, Debug)]
struct EventFlags {
    default_prevented: Cell<bool>,
    propagation_stopped: Cell<bool>,
}

/// Normalised pointer event handed from the host to the widget.
///
/// The default-action and propagation flags are shared between clones so the
/// host can read back what the handlers decided after dispatch.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub coordinates: PointerCoordinates,
    pub target: HitTarget,
    flags: Rc<EventFlags>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, coordinates: PointerCoordinates) -> Self {
        Self {
            kind,
            coordinates,
            target: HitTarget::default(),
            flags: Rc::new(EventFlags::default()),
        }
    }

    pub fn mouse(kind: PointerEventKind, x: f32, y: f32) -> Self {
        Self::new(kind, PointerCoordinates::Mouse(Point::new(x, y)))
    }

    pub fn touch(kind: PointerEventKind, changed: impl IntoIterator<Item = TouchPoint>) -> Self {
        Self::new(kind, PointerCoordinates::Touch(changed.into_iter().collect()))
    }

    pub fn with_target(mut self, target: HitTarget) -> Self {
        self.target = target;
        self
    }

    pub fn source(&self) -> PointerSource {
        self.coordinates.source()
    }

    /// Horizontal client coordinate of the tracked contact, if there is one.
    pub fn client_x(&self) -> Option<f32> {
        self.coordinates.primary().map(|point| point.x)
    }

    pub fn prevent_default(&self) {
        self.flags.default_prevented.set(true);
    }

    pub fn is_default_prevented(&self) -> bool {
        self.flags.default_prevented.get()
    }

    pub fn stop_propagation(&self) {
        self.flags.propagation_stopped.set(true);
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.flags.propagation_stopped.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_uses_own_coordinates() {
        let event = PointerEvent::mouse(PointerEventKind::Down, 42.0, 7.0);
        assert_eq!(event.source(), PointerSource::Mouse);
        assert_eq!(event.client_x(), Some(42.0));
    }

    #[test]
    fn touch_uses_first_changed_touch() {
        let event = PointerEvent::touch(
            PointerEventKind::Move,
            [
                TouchPoint::new(3, Point::new(120.0, 10.0)),
                TouchPoint::new(4, Point::new(300.0, 10.0)),
            ],
        );
        assert_eq!(event.source(), PointerSource::Touch);
        assert_eq!(event.client_x(), Some(120.0));
    }

    #[test]
    fn touch_without_changed_points_has_no_position() {
        let event = PointerEvent::touch(PointerEventKind::Up, []);
        assert_eq!(event.client_x(), None);
    }

    #[test]
    fn flags_are_shared_between_clones() {
        let event = PointerEvent::mouse(PointerEventKind::Click, 0.0, 0.0);
        let copy = event.clone();
        copy.prevent_default();
        copy.stop_propagation();
        assert!(event.is_default_prevented());
        assert!(event.is_propagation_stopped());
    }
}
