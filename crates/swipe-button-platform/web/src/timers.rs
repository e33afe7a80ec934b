//! `setTimeout`-backed [`TimerScheduler`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use swipe_button_core::{Duration, TimerId, TimerScheduler};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

struct PendingTimer {
    handle: i32,
    callback: Box<dyn FnOnce()>,
}

/// Armed timers keyed by our own id; the browser handle is kept for
/// `clearTimeout`.
#[derive(Default)]
struct TimerSlots {
    next_id: TimerId,
    pending: HashMap<TimerId, PendingTimer>,
}

impl TimerSlots {
    fn reserve(&mut self) -> TimerId {
        self.next_id += 1;
        self.next_id
    }

    fn arm(&mut self, id: TimerId, handle: i32, callback: Box<dyn FnOnce()>) {
        self.pending.insert(id, PendingTimer { handle, callback });
    }

    /// Removes a timer that fired and hands back its callback.
    fn take_due(&mut self, id: TimerId) -> Option<Box<dyn FnOnce()>> {
        self.pending.remove(&id).map(|timer| timer.callback)
    }

    /// Removes a timer before it fired and hands back its browser handle.
    fn disarm(&mut self, id: TimerId) -> Option<i32> {
        self.pending.remove(&id).map(|timer| timer.handle)
    }

    fn drain_handles(&mut self) -> Vec<i32> {
        self.pending.drain().map(|(_, timer)| timer.handle).collect()
    }

    fn len(&self) -> usize {
        self.pending.len()
    }
}

pub struct WindowTimers {
    window: Window,
    slots: Rc<RefCell<TimerSlots>>,
    /// One JS function serves every timer; the timer id arrives as the
    /// timeout argument.
    dispatch: Closure<dyn FnMut(JsValue)>,
}

impl WindowTimers {
    pub fn new(window: Window) -> Self {
        let slots = Rc::new(RefCell::new(TimerSlots::default()));
        let weak = Rc::downgrade(&slots);
        let dispatch = Closure::wrap(Box::new(move |id: JsValue| {
            let Some(id) = id.as_f64() else {
                return;
            };
            let callback = weak
                .upgrade()
                .and_then(|slots| slots.borrow_mut().take_due(id as TimerId));
            if let Some(callback) = callback {
                callback();
            }
        }) as Box<dyn FnMut(_)>);
        Self {
            window,
            slots,
            dispatch,
        }
    }

    pub fn pending(&self) -> usize {
        self.slots.borrow().len()
    }
}

impl TimerScheduler for WindowTimers {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId {
        let id = self.slots.borrow_mut().reserve();
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match self.window.set_timeout_with_callback_and_timeout_and_arguments_1(
            self.dispatch.as_ref().unchecked_ref(),
            millis,
            &JsValue::from_f64(id as f64),
        ) {
            Ok(handle) => self.slots.borrow_mut().arm(id, handle, callback),
            Err(err) => log::error!("setTimeout failed: {err:?}"),
        }
        id
    }

    fn cancel(&self, id: TimerId) {
        let handle = self.slots.borrow_mut().disarm(id);
        if let Some(handle) = handle {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

impl Drop for WindowTimers {
    // `dispatch` is freed with us, so no browser timer may still point at it.
    fn drop(&mut self) {
        let handles = self.slots.borrow_mut().drain_handles();
        for handle in handles {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}
