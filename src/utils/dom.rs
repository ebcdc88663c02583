//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Element, Storage, Window};

use crate::config::PREFERS_DARK_QUERY;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Get the `<html>` element.
pub fn document_element() -> Option<Element> {
    window()?.document()?.document_element()
}

/// Set an attribute on the `<html>` element.
pub fn set_root_attribute(name: &str, value: &str) {
    if let Some(root) = document_element() {
        let _ = root.set_attribute(name, value);
    }
}

/// Whether the system color scheme is dark, read synchronously.
pub fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
        .is_some_and(|list| list.matches())
}

/// Local hour of day (0-23).
pub fn local_hour() -> u32 {
    js_sys::Date::new_0().get_hours()
}

// =============================================================================
// Fullscreen
// =============================================================================

/// Whether any element is currently fullscreen.
pub fn is_fullscreen() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.fullscreen_element())
        .is_some()
}

/// Put `element` into browser fullscreen.
///
/// Returns `true` if the request was issued.
pub fn request_fullscreen(element: &Element) -> bool {
    element.request_fullscreen().is_ok()
}

/// Leave browser fullscreen if active.
pub fn exit_fullscreen() {
    if let Some(document) = window().and_then(|w| w.document())
        && document.fullscreen_element().is_some()
    {
        document.exit_fullscreen();
    }
}
