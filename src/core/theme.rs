//! Light/dark theme selection and persistence.
//!
//! The initial theme is chosen in this order: the saved preference, then
//! night time (dark), then the system color scheme, then light.

use crate::config::{NIGHT_ENDS_HOUR, NIGHT_STARTS_HOUR, THEME_ATTRIBUTE, THEME_STORAGE_KEY};
use crate::core::error::ThemeError;
use crate::utils::dom;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Tooltip for the toggle button while this theme is active.
    pub fn toggle_hint(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}

/// Whether `hour` (0-23) falls in the night window.
pub fn is_night(hour: u32) -> bool {
    hour < NIGHT_ENDS_HOUR || hour >= NIGHT_STARTS_HOUR
}

/// Pick the theme to start with.
pub fn resolve_initial(saved: Option<Theme>, hour: u32, system_dark: bool) -> Theme {
    match saved {
        Some(theme) => theme,
        None if is_night(hour) || system_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Theme to start with, read from storage, the clock and `matchMedia`.
pub fn initial_theme() -> Theme {
    resolve_initial(load_saved(), dom::local_hour(), dom::prefers_dark())
}

/// Theme to switch to after the system color scheme reported `dark`.
///
/// `prev` is the previously reported value. Only an actual change is
/// followed, and never while a preference is saved.
pub fn follow_system(prev: Option<bool>, dark: bool, saved: Option<Theme>) -> Option<Theme> {
    match (prev, saved) {
        (Some(prev), None) if prev != dark => Some(if dark { Theme::Dark } else { Theme::Light }),
        _ => None,
    }
}

/// Read the saved preference from localStorage.
pub fn load_saved() -> Option<Theme> {
    let storage = dom::local_storage()?;
    let value = storage.get_item(THEME_STORAGE_KEY).ok()??;
    Theme::parse(&value)
}

/// Persist an explicit user choice.
pub fn save(theme: Theme) -> Result<(), ThemeError> {
    let storage = dom::local_storage().ok_or(ThemeError::StorageUnavailable)?;
    storage
        .set_item(THEME_STORAGE_KEY, theme.as_str())
        .map_err(|_| ThemeError::SaveFailed)
}

/// Set `data-theme` on the document root.
pub fn apply(theme: Theme) {
    dom::set_root_attribute(THEME_ATTRIBUTE, theme.as_str());
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn clear_saved() {
        if let Some(storage) = dom::local_storage() {
            let _ = storage.remove_item(THEME_STORAGE_KEY);
        }
    }

    #[wasm_bindgen_test]
    fn test_initial_theme_reads_system_scheme_synchronously() {
        clear_saved();
        let system_dark = dom::window()
            .and_then(|w| w.match_media(crate::config::PREFERS_DARK_QUERY).ok().flatten())
            .is_some_and(|list| list.matches());
        assert_eq!(dom::prefers_dark(), system_dark);
        assert_eq!(
            initial_theme(),
            resolve_initial(None, dom::local_hour(), system_dark)
        );
    }

    #[wasm_bindgen_test]
    fn test_initial_theme_prefers_saved() {
        save(Theme::Dark).unwrap();
        assert_eq!(initial_theme(), Theme::Dark);
        save(Theme::Light).unwrap();
        assert_eq!(initial_theme(), Theme::Light);
        clear_saved();
    }
}
