//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Folder`], [`FileEntry`], [`ContentResponse`] - API payloads
//! - [`Loadable`], [`FileListView`], [`ContentView`] - Derived view state

mod browser;

pub use browser::{ContentResponse, ContentView, FileEntry, FileListView, Folder, Loadable};
