//! Swipe button widget lifecycle.
//!
//! `attach` mounts the view and wires the bridge to the host's event
//! sources; `destroy` undoes all of it. Listeners hold the bridge weakly, so
//! a host that outlives the widget never keeps it alive.

use crate::action::GoalAction;
use crate::event_bridge::EventBridge;
use crate::host::{EventSource, EventType, HostServices, NativeEvent};
use crate::options::SwipeButtonOptions;
use crate::view::{MountError, SwipeView};
use std::rc::Rc;
use swipe_button_core::{DelayedCall, Subscription, SubscriptionSet};
use swipe_button_foundation::{GestureState, GoalReached, TravelBounds};

pub struct SwipeButton {
    options: SwipeButtonOptions,
    bridge: Rc<EventBridge>,
    subscriptions: SubscriptionSet,
    attached: bool,
}

impl SwipeButton {
    /// Mounts `view` and subscribes to the host. Nothing is subscribed when
    /// the view cannot be mounted.
    pub fn attach(
        options: SwipeButtonOptions,
        view: Box<dyn SwipeView>,
        services: &HostServices,
    ) -> Result<Self, MountError> {
        let action = GoalAction::new(
            &options,
            Rc::clone(&services.navigator),
            services.analytics.clone(),
        );
        let on_goal = DelayedCall::new(
            Rc::clone(&services.timers),
            options.goal_delay,
            move |goal: GoalReached| action.fire(&goal),
        );
        let bridge = Rc::new(EventBridge::new(options.gesture_config(), view, on_goal));
        bridge.mount()?;

        let mut subscriptions = SubscriptionSet::new();
        subscriptions.push(listen(services, &bridge, EventSource::Track, &[EventType::Click]));
        subscriptions.push(listen(services, &bridge, EventSource::Window, &[EventType::Resize]));
        bridge.refresh_bounds();
        subscriptions.extend([
            listen(services, &bridge, EventSource::Track, &EventType::PRESS),
            listen(services, &bridge, EventSource::Document, &EventType::MOVE),
            listen(services, &bridge, EventSource::Document, &EventType::RELEASE),
        ]);

        log::debug!(
            "swipe button attached: target {:?}, threshold {}",
            options.target_url,
            options.release_threshold
        );
        Ok(Self {
            options,
            bridge,
            subscriptions,
            attached: true,
        })
    }

    pub fn options(&self) -> &SwipeButtonOptions {
        &self.options
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn gesture_state(&self) -> GestureState {
        self.bridge.gesture_state()
    }

    pub fn travel_bounds(&self) -> TravelBounds {
        self.bridge.bounds()
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn has_pending_goal(&self) -> bool {
        self.bridge.has_pending_goal()
    }

    /// Tears the widget down. Only the first call has an effect.
    pub fn destroy(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        let released = self.subscriptions.release_all();
        if self.bridge.cancel_pending_goal() {
            log::debug!("swipe button destroyed with a pending goal; dropped");
        }
        self.bridge.unmount();
        log::debug!("swipe button destroyed, released {released} subscriptions");
    }
}

impl Drop for SwipeButton {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn listen(
    services: &HostServices,
    bridge: &Rc<EventBridge>,
    source: EventSource,
    types: &[EventType],
) -> Subscription {
    let bridge = Rc::downgrade(bridge);
    services.events.listen(
        source,
        types,
        Rc::new(move |event: &NativeEvent| {
            if let Some(bridge) = bridge.upgrade() {
                bridge.handle(event);
            }
        }),
    )
}
