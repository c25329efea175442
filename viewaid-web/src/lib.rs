#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod components;
pub mod dom;
pub mod surface;
pub mod widget;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Entry point for JS hosts: install the widget into the current page.
///
/// Call once; see [`widget::mount`].
///
/// # Errors
/// Returns an error if the stylesheet or widget container cannot be inserted.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = mountViewaid)]
pub fn mount_viewaid() -> Result<(), JsValue> {
    widget::mount().inspect_err(|err| {
        log::error!(
            "failed to mount viewaid widget: {}",
            dom::js_error_message(err)
        );
    })
}
