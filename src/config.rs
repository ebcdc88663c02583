//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the sidebar header.
pub const APP_NAME: &str = "Eros";

/// Application tagline displayed under the name.
pub const APP_TAGLINE: &str = "Analysis results";

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL prepended to every API path. Empty means same origin.
pub const API_BASE: &str = "";

/// Folder listing endpoint.
pub const FOLDERS_PATH: &str = "/api/folders";

/// File listing endpoint prefix (`{FILES_PATH}/{folder}`).
pub const FILES_PATH: &str = "/api/files";

/// Content endpoint prefix (`{CONTENT_PATH}/{folder}/{file}`).
pub const CONTENT_PATH: &str = "/api/content";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Theme Configuration
// =============================================================================

/// localStorage key for the saved theme preference.
pub const THEME_STORAGE_KEY: &str = "eros-theme-preference";

/// Attribute set on `<html>` to select the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Media query for the system dark scheme.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Night time window: hours before this are night.
pub const NIGHT_ENDS_HOUR: u32 = 6;

/// Night time window: hours from this on are night.
pub const NIGHT_STARTS_HOUR: u32 = 18;

// =============================================================================
// Sanitizer Allow-lists
// =============================================================================

/// Tags kept in rendered markdown. Everything else is stripped.
pub const ALLOWED_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "br", "hr", "strong", "em", "del", "ins", "code",
    "pre", "ul", "ol", "li", "blockquote", "table", "thead", "tbody", "tr", "th", "td", "a", "img",
    "div", "span",
];

/// Prefix of the token classes emitted for highlighted code.
pub const HIGHLIGHT_CLASS_PREFIX: &str = "hl-";

/// Attributes kept on any allowed tag.
pub const ALLOWED_ATTRIBUTES: &[&str] = &["href", "title", "src", "alt", "class", "style"];

// =============================================================================
// UI Messages
// =============================================================================

/// UI text shown in the various list and viewer states.
pub mod messages {
    /// Shown in a region whose fetch failed outright.
    pub const LOAD_FAILED: &str = "Failed to load";
    /// Shown in the file list when a folder has no files.
    pub const EMPTY_FOLDER: &str = "This folder has no files yet";
    /// Shown in the sidebar when no folders exist.
    pub const NO_FOLDERS: &str = "No folders";
    /// Shown in the viewer before any file is selected.
    pub const SELECT_FILE: &str = "Select a file to view its content";
    /// Shown in the file list before any folder is selected.
    pub const SELECT_FOLDER: &str = "Select a folder";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
