//! Trigger a file download from a data URL.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

/// Offer `data_url` to the user as a file named `filename`.
///
/// # Errors
///
/// Returns the JS error if there is no document or the anchor cannot be
/// created.
pub fn save_data_url(data_url: &str, filename: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(JsValue::from)?;
    anchor.set_download(filename);
    anchor.set_href(data_url);
    anchor.click();
    Ok(())
}
