//! Browser Bindings
//!
//! Wrappers around the injected wallet and the page location, organized by concern.

mod wallet;
mod location;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "aptos"], js_name = connect)]
    async fn aptos_connect() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "aptos"], js_name = disconnect)]
    async fn aptos_disconnect() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "aptos"], js_name = account)]
    async fn aptos_account() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "aptos"], js_name = signAndSubmitTransaction)]
    async fn aptos_sign_and_submit(payload: JsValue) -> Result<JsValue, JsValue>;
}

/// Best-effort text of a thrown JS value: `Error.message`, a bare string, or its debug form.
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

// Re-export all public items
pub use wallet::*;
pub use location::*;
