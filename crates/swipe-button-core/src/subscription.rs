//! Owned listener registrations.
//!
//! Every listener the widget installs on a host event source is represented by
//! a [`Subscription`]. Releasing consumes the handle, so a registration can be
//! released at most once. A [`SubscriptionSet`] keeps the handles of one
//! widget in registration order and releases them together on teardown.

use std::fmt;

pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wraps the host-specific removal routine.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A handle with nothing to release, for hosts that failed to register.
    pub fn inactive() -> Self {
        Self { release: None }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn release(mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct SubscriptionSet {
    handles: Vec<Subscription>,
}

impl SubscriptionSet {
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    pub fn push(&mut self, subscription: Subscription) {
        self.handles.push(subscription);
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Releases every handle in registration order and empties the set.
    ///
    /// Returns the number of handles released.
    pub fn release_all(&mut self) -> usize {
        let count = self.handles.len();
        for subscription in self.handles.drain(..) {
            subscription.release();
        }
        count
    }
}

impl Extend<Subscription> for SubscriptionSet {
    fn extend<T: IntoIterator<Item = Subscription>>(&mut self, iter: T) {
        self.handles.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn release_all_runs_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut set = SubscriptionSet::new();
        for name in ["click", "resize", "press"] {
            let log = Rc::clone(&log);
            set.push(Subscription::new(move || log.borrow_mut().push(name)));
        }

        assert_eq!(set.release_all(), 3);
        assert_eq!(log.borrow().as_slice(), &["click", "resize", "press"]);
        assert!(set.is_empty());
    }

    #[test]
    fn second_release_all_is_noop() {
        let count = Rc::new(RefCell::new(0));
        let mut set = SubscriptionSet::new();
        {
            let count = Rc::clone(&count);
            set.push(Subscription::new(move || *count.borrow_mut() += 1));
        }

        set.release_all();
        assert_eq!(set.release_all(), 0);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn inactive_subscription_is_harmless() {
        let subscription = Subscription::inactive();
        assert!(!subscription.is_active());
        subscription.release();
    }
}
