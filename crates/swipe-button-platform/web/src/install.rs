//! Page-level installation of swipe buttons.

use crate::{DomEventHost, DomView, LocationNavigator, MetrikaSink, WindowTimers};
use std::cell::RefCell;
use std::rc::Rc;
use swipe_button_ui::{class_names, HostMarkup, HostServices, SwipeButton, SwipeButtonOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, EventTarget, HtmlAnchorElement, HtmlElement, Node};

struct Installed {
    node: HtmlElement,
    button: SwipeButton,
}

thread_local! {
    static INSTALLED: RefCell<Vec<Installed>> = RefCell::new(Vec::new());
}

/// Reads the swipe button attributes declared on a host control.
pub fn read_markup(node: &HtmlElement) -> HostMarkup {
    let dataset = node.dataset();
    let href = match node.dyn_ref::<HtmlAnchorElement>() {
        Some(anchor) => Some(anchor.href()),
        None => node.get_attribute("href"),
    };
    HostMarkup {
        href,
        label: node.text_content().unwrap_or_default(),
        note: dataset.get("note"),
        extra_class: dataset.get("class"),
        threshold: dataset.get("threshold"),
        metrika_id: dataset.get("metrikaId"),
        metrika_event: dataset.get("metrikaEvent"),
    }
}

/// Replaces `node` with a swipe button. A node that already has one is left
/// alone; a node with malformed attributes is left untouched and reported as
/// an error.
pub fn install(node: &HtmlElement) -> Result<(), JsValue> {
    if is_installed(node) {
        log::debug!("swipe button already installed on node");
        return Ok(());
    }
    let window = web_sys::window().ok_or("no global window exists")?;
    let document = window.document().ok_or("should have a document on window")?;

    let options = SwipeButtonOptions::from_markup(&read_markup(node))
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    let view = DomView::build(&window, &document, node.clone(), &options)?;
    let track: EventTarget = view.track().clone().into();
    let root: EventTarget = match document.document_element() {
        Some(root) => root.into(),
        None => document.clone().into(),
    };
    let events = DomEventHost::new(track, root, window.clone().into());

    let mut services = HostServices::new(
        Rc::new(events),
        Rc::new(WindowTimers::new(window.clone())),
        Rc::new(LocationNavigator::new(window.clone())),
    );
    match MetrikaSink::detect(&window) {
        Some(sink) => services = services.with_analytics(Rc::new(sink)),
        None => log::debug!("ym not found, swipe goals navigate without reporting"),
    }

    let button = SwipeButton::attach(options, Box::new(view), &services)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    INSTALLED.with(|installed| {
        installed.borrow_mut().push(Installed {
            node: node.clone(),
            button,
        })
    });
    Ok(())
}

/// Installs a swipe button on every `.btn-swipe` element of `document`.
/// Returns how many were installed; failures are logged and skipped.
pub fn install_all(document: &Document) -> Result<usize, JsValue> {
    let nodes = document.query_selector_all(&class_names::install_selector())?;
    let mut count = 0;
    for index in 0..nodes.length() {
        let Some(node) = nodes
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        match install(&node) {
            Ok(()) => count += 1,
            Err(err) => log::error!("failed to install swipe button: {err:?}"),
        }
    }
    log::info!("installed {count} swipe button(s)");
    Ok(count)
}

/// Runs [`install_all`] once the document is parsed, or right away if it
/// already is.
pub fn install_on_ready() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no global window exists")?;
    let document = window.document().ok_or("should have a document on window")?;

    if document.ready_state() != "loading" {
        install_all(&document)?;
        return Ok(());
    }

    let closure = Closure::once(move || {
        if let Err(err) = install_all(&document) {
            log::error!("failed to install swipe buttons: {err:?}");
        }
    });
    window.add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn installed_count() -> usize {
    INSTALLED.with(|installed| installed.borrow().len())
}

/// Tears down every installed swipe button and restores the host controls.
pub fn destroy_all() -> usize {
    let installed = INSTALLED.with(|installed| std::mem::take(&mut *installed.borrow_mut()));
    let count = installed.len();
    for mut entry in installed {
        entry.button.destroy();
    }
    count
}

fn is_installed(node: &HtmlElement) -> bool {
    let node: &Node = node;
    INSTALLED.with(|installed| {
        installed
            .borrow()
            .iter()
            .any(|entry| entry.node.is_same_node(Some(node)))
    })
}
