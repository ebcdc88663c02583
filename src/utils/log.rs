//! Browser console logging.
//!
//! Calls compile to `console.*` on wasm32 and to nothing elsewhere, so native
//! test runs never touch the JS bindings.

/// Log an informational message.
#[allow(unused_variables)]
pub fn info(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&message.into());
}

/// Log a warning.
#[allow(unused_variables)]
pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
}

/// Log an error.
#[allow(unused_variables)]
pub fn error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&message.into());
}
