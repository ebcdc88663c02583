//! Utility modules for web, DOM, and rendering operations.
//!
//! Provides:
//! - [`fetch_json`] - Network fetching with timeout
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization
//! - [`log`] - Browser console logging

pub mod dom;
mod fetch;
pub mod log;
mod markdown;

pub use fetch::fetch_json;
pub use markdown::markdown_to_html;
