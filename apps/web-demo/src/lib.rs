//! Demo page: every `.btn-swipe` link on `static/index.html` becomes a swipe
//! button once the document is parsed.

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    swipe_button_platform_web::install_on_ready()
}

/// Tears down all swipe buttons on the page, restoring the original links.
#[wasm_bindgen]
pub fn destroy_swipe_buttons() -> usize {
    swipe_button_platform_web::destroy_all()
}

/// Re-scans the page for `.btn-swipe` links added after load.
#[wasm_bindgen]
pub fn install_swipe_buttons() -> Result<usize, JsValue> {
    let window = web_sys::window().ok_or("no global window exists")?;
    let document = window.document().ok_or("should have a document on window")?;
    swipe_button_platform_web::install_all(&document)
}
