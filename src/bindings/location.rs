//! Location Bindings

/// `window.location.origin`, e.g. `https://vibes.example`.
pub fn site_origin() -> Result<String, String> {
    let window = web_sys::window().ok_or("no window")?;
    window
        .location()
        .origin()
        .map_err(|e| super::js_error_message(&e))
}

/// Fragment without the leading `#`.
pub fn location_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| hash.trim_start_matches('#').to_string())
        .unwrap_or_default()
}

pub fn set_location_hash(hash: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_hash(hash) {
            log::warn!("Failed to set location hash: {}", super::js_error_message(&err));
        }
    }
}
