//! In-memory host capabilities.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use swipe_button_core::Subscription;
use swipe_button_foundation::TrackMetrics;
use swipe_button_ui::{
    AnalyticsSink, EventHost, EventSource, EventType, Listener, MountError, NativeEvent, Navigator,
    SwipeView,
};

struct Registration {
    id: u64,
    source: EventSource,
    types: Vec<EventType>,
    listener: Listener,
}

/// Event host that delivers events only when a test dispatches them.
///
/// Released subscriptions are removed immediately, so nothing dispatched
/// afterwards reaches their listeners.
#[derive(Default)]
pub struct FakeEventHost {
    registrations: Rc<RefCell<Vec<Registration>>>,
    next_id: Cell<u64>,
}

impl FakeEventHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `event` to every listener registered for `ty` on `source`,
    /// in registration order. Returns the number of listeners invoked.
    pub fn dispatch(&self, source: EventSource, ty: EventType, event: &NativeEvent) -> usize {
        let listeners: Vec<Listener> = self
            .registrations
            .borrow()
            .iter()
            .filter(|r| r.source == source && r.types.contains(&ty))
            .map(|r| Rc::clone(&r.listener))
            .collect();
        for listener in &listeners {
            listener(event);
        }
        listeners.len()
    }

    /// Number of live registrations across all sources.
    pub fn listener_count(&self) -> usize {
        self.registrations.borrow().len()
    }

    pub fn listens_for(&self, source: EventSource, ty: EventType) -> bool {
        self.registrations
            .borrow()
            .iter()
            .any(|r| r.source == source && r.types.contains(&ty))
    }
}

impl EventHost for FakeEventHost {
    fn listen(&self, source: EventSource, types: &[EventType], listener: Listener) -> Subscription {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.registrations.borrow_mut().push(Registration {
            id,
            source,
            types: types.to_vec(),
            listener,
        });
        let registrations = Rc::downgrade(&self.registrations);
        Subscription::new(move || {
            if let Some(registrations) = registrations.upgrade() {
                registrations.borrow_mut().retain(|r| r.id != id);
            }
        })
    }
}

#[derive(Default)]
struct FakeViewState {
    metrics: Option<TrackMetrics>,
    offsets: Vec<f32>,
    mounted: bool,
    mounts: usize,
    unmounts: usize,
    mount_failure: Option<MountError>,
}

/// View double. Clones share state, so a test keeps one clone for
/// inspection while the widget owns another.
#[derive(Clone, Default)]
pub struct FakeView {
    state: Rc<RefCell<FakeViewState>>,
}

impl FakeView {
    pub fn new(metrics: Option<TrackMetrics>) -> Self {
        let view = Self::default();
        view.set_metrics(metrics);
        view
    }

    pub fn set_metrics(&self, metrics: Option<TrackMetrics>) {
        self.state.borrow_mut().metrics = metrics;
    }

    pub fn offsets(&self) -> Vec<f32> {
        self.state.borrow().offsets.clone()
    }

    pub fn last_offset(&self) -> Option<f32> {
        self.state.borrow().offsets.last().copied()
    }

    /// Makes every later `mount` fail with `error`.
    pub fn fail_mount_with(&self, error: MountError) {
        self.state.borrow_mut().mount_failure = Some(error);
    }

    pub fn is_mounted(&self) -> bool {
        self.state.borrow().mounted
    }

    pub fn mount_count(&self) -> usize {
        self.state.borrow().mounts
    }

    pub fn unmount_count(&self) -> usize {
        self.state.borrow().unmounts
    }
}

impl SwipeView for FakeView {
    fn measure(&self) -> Option<TrackMetrics> {
        self.state.borrow().metrics
    }

    fn render_offset(&mut self, offset: f32) {
        self.state.borrow_mut().offsets.push(offset);
    }

    fn mount(&mut self) -> Result<(), MountError> {
        let mut state = self.state.borrow_mut();
        if let Some(error) = state.mount_failure.clone() {
            return Err(error);
        }
        state.mounted = true;
        state.mounts += 1;
        Ok(())
    }

    fn unmount(&mut self) {
        let mut state = self.state.borrow_mut();
        state.mounted = false;
        state.unmounts += 1;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalyticsCall {
    Goal { counter_id: String, goal: String },
    ExternalLink { counter_id: String, url: String },
}

/// Analytics double that records calls and holds completion callbacks until
/// the test releases them.
#[derive(Default)]
pub struct RecordingAnalytics {
    calls: RefCell<Vec<AnalyticsCall>>,
    pending: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl RecordingAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<AnalyticsCall> {
        self.calls.borrow().clone()
    }

    pub fn pending_completions(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Runs every held completion callback. Returns how many ran.
    pub fn complete_pending(&self) -> usize {
        let pending: Vec<_> = self.pending.borrow_mut().drain(..).collect();
        let count = pending.len();
        for complete in pending {
            complete();
        }
        count
    }
}

impl AnalyticsSink for RecordingAnalytics {
    fn report_goal(&self, counter_id: &str, goal: &str) {
        self.calls.borrow_mut().push(AnalyticsCall::Goal {
            counter_id: counter_id.to_owned(),
            goal: goal.to_owned(),
        });
    }

    fn report_external_link(&self, counter_id: &str, url: &str, on_complete: Box<dyn FnOnce()>) {
        self.calls.borrow_mut().push(AnalyticsCall::ExternalLink {
            counter_id: counter_id.to_owned(),
            url: url.to_owned(),
        });
        self.pending.borrow_mut().push(on_complete);
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visits: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) {
        log::debug!("navigate -> {url}");
        self.visits.borrow_mut().push(url.to_owned());
    }
}
