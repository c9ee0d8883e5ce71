//! Clipboard utilities for copying text to clipboard

use wasm_bindgen_futures::spawn_local;

/// Copy text to the system clipboard
///
/// Uses the Web Clipboard API. Failures are logged and otherwise ignored.
///
/// # Example
/// ```ignore
/// copy_to_clipboard("98765 43210");
/// ```
pub fn copy_to_clipboard(text: &str) {
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_) => log::debug!("Copied to clipboard: {}", text),
            Err(err) => log::warn!("Clipboard write failed: {:?}", err),
        }
    });
}
