//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuFileText as FileText, LuFolder as Folder, LuInbox as Inbox, LuMaximize as Fullscreen,
        LuMinimize as FullscreenExit, LuMoon as Moon, LuRefreshCw as Refresh, LuSun as Sun,
        LuTriangleAlert as Warning,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Refresh, BsExclamationTriangle as Warning,
        BsFileEarmarkText as FileText, BsFolderFill as Folder, BsFullscreen as Fullscreen,
        BsFullscreenExit as FullscreenExit, BsInbox as Inbox, BsMoonFill as Moon,
        BsSunFill as Sun,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(FOLDER, Folder);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(REFRESH, Refresh);
themed_icon!(FULLSCREEN, Fullscreen);
themed_icon!(FULLSCREEN_EXIT, FullscreenExit);
themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
themed_icon!(WARNING, Warning);
themed_icon!(INBOX, Inbox);
