//! Leptos HashRoute Utilities
//!
//! Minimal URL-fragment routing for Leptos apps using the window `hashchange` event.
//! Back/forward navigation fires the same event, so one listener covers both
//! link clicks and history traversal.

use wasm_bindgen::JsCast;

/// Bring a raw fragment into `#/...` form.
///
/// `""`, `"#"` and `"#/"` all become `"#/"`; a fragment missing its leading
/// `#` or `/` gets them added.
pub fn normalize_fragment(raw: &str) -> String {
    let path = raw.trim().trim_start_matches('#').trim_start_matches('/');
    format!("#/{}", path)
}

/// Fragment of the current location, empty when there is none
pub fn current_hash() -> String {
    web_sys::window()
        .and_then(|win| win.location().hash().ok())
        .unwrap_or_default()
}

/// Bind window hashchange handler.
/// Calls `on_change` with the new fragment; the listener lives as long as the page.
pub fn bind_hashchange<F>(on_change: F)
where
    F: Fn(String) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_hashchange = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        on_change(current_hash());
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("hashchange", on_hashchange.as_ref().unchecked_ref());
    }
    on_hashchange.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_fragment() {
        assert_eq!(normalize_fragment(""), "#/");
        assert_eq!(normalize_fragment("#"), "#/");
        assert_eq!(normalize_fragment("#/"), "#/");
        assert_eq!(normalize_fragment("#/active"), "#/active");
        assert_eq!(normalize_fragment("active"), "#/active");
        assert_eq!(normalize_fragment("/completed"), "#/completed");
    }
}
