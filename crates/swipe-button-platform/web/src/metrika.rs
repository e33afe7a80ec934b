//! Yandex Metrika reporting through the page's global `ym` function.

use js_sys::{Array, Function, Object, Reflect};
use swipe_button_ui::AnalyticsSink;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

pub struct MetrikaSink {
    ym: Function,
}

impl MetrikaSink {
    /// `Some` when the page has loaded the Metrika tag, i.e. `window.ym` is a
    /// function.
    pub fn detect(window: &Window) -> Option<Self> {
        let ym = Reflect::get(window, &JsValue::from_str("ym")).ok()?;
        ym.dyn_into::<Function>().ok().map(|ym| Self { ym })
    }

    fn call(&self, args: &Array) {
        if let Err(err) = self.ym.apply(&JsValue::UNDEFINED, args) {
            log::error!("ym call failed: {err:?}");
        }
    }
}

/// Numeric counter ids are passed as numbers, anything else verbatim.
fn counter(counter_id: &str) -> JsValue {
    match counter_id.trim().parse::<f64>() {
        Ok(id) => JsValue::from_f64(id),
        Err(_) => JsValue::from_str(counter_id),
    }
}

impl AnalyticsSink for MetrikaSink {
    fn report_goal(&self, counter_id: &str, goal: &str) {
        log::debug!("ym({counter_id}, reachGoal, {goal})");
        self.call(&Array::of3(
            &counter(counter_id),
            &JsValue::from_str("reachGoal"),
            &JsValue::from_str(goal),
        ));
    }

    fn report_external_link(&self, counter_id: &str, url: &str, on_complete: Box<dyn FnOnce()>) {
        log::debug!("ym({counter_id}, extLink, {url})");
        let params = Object::new();
        let callback = Closure::once_into_js(move || on_complete());
        if let Err(err) = Reflect::set(&params, &JsValue::from_str("callback"), &callback) {
            log::error!("failed to attach extLink callback: {err:?}");
        }
        self.call(&Array::of4(
            &counter(counter_id),
            &JsValue::from_str("extLink"),
            &JsValue::from_str(url),
            &params,
        ));
    }
}
