//! Result browser UI components.
//!
//! Components:
//! - [`Browser`] - Three-pane layout and global key handling
//! - [`Sidebar`] - Folder list with file counts
//! - [`FileList`] - Files of the selected folder
//! - [`Viewer`] - Rendered markdown with refresh, fullscreen and theme actions

#[allow(clippy::module_inception)]
mod browser;
mod empty_state;
mod file_list;
mod sidebar;
mod viewer;

pub use browser::Browser;
pub use file_list::FileList;
pub use sidebar::Sidebar;
pub use viewer::Viewer;
