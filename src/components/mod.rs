//! UI components built with Leptos.
//!
//! - [`browser`] - Folder sidebar, file list and content viewer
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod browser;
pub mod icons;

pub use browser::Browser;
