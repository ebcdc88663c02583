//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use leptos_use::use_media_query;
use wasm_bindgen_futures::spawn_local;

use crate::components::Browser;
use crate::config::PREFERS_DARK_QUERY;
use crate::core::keyboard::KeyAction;
use crate::core::theme::{self, Theme};
use crate::core::{BrowserState, Controller, Direction, HttpFileApi, StateStore};
use crate::utils::log;

/// Controller type used by the app: HTTP API, signal-backed state.
pub type BrowserController = Controller<HttpFileApi, RwSignal<BrowserState>>;

impl StateStore for RwSignal<BrowserState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut BrowserState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from children
/// with `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because every field is a Leptos signal or a
/// controller holding one.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Selection, cache and derived view state.
    pub browser: RwSignal<BrowserState>,
    /// Drives `browser` through the HTTP API.
    pub controller: BrowserController,
    /// Active color theme.
    pub theme: RwSignal<Theme>,
    /// Whether the content viewer is in browser fullscreen.
    pub fullscreen: RwSignal<bool>,
}

impl AppContext {
    pub fn new() -> Self {
        let browser = RwSignal::new(BrowserState::new());
        Self {
            browser,
            controller: Controller::new(HttpFileApi::default(), browser),
            theme: RwSignal::new(Theme::default()),
            fullscreen: RwSignal::new(false),
        }
    }

    /// Load folders and counts, then open the first folder.
    pub fn initialize(&self) {
        let controller = self.controller;
        spawn_local(async move { controller.initialize().await });
    }

    pub fn select_folder(&self, folder: String) {
        let controller = self.controller;
        spawn_local(async move { controller.select_folder(&folder).await });
    }

    pub fn select_file(&self, folder: String, file: String) {
        let controller = self.controller;
        spawn_local(async move { controller.select_file(&folder, &file).await });
    }

    pub fn refresh(&self) {
        let controller = self.controller;
        spawn_local(async move { controller.refresh_current_file().await });
    }

    pub fn navigate(&self, direction: Direction) {
        let controller = self.controller;
        spawn_local(async move { controller.navigate(direction).await });
    }

    pub fn handle_key(&self, action: KeyAction) {
        match action {
            KeyAction::Refresh => self.refresh(),
            KeyAction::Navigate(direction) => self.navigate(direction),
        }
    }

    /// Flip the theme and remember the choice.
    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        if let Err(e) = theme::save(next) {
            log::warn(&format!("Theme not saved: {}", e));
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the initial theme and keep `data-theme` in sync.
///
/// System scheme changes are followed only while no choice is saved.
fn setup_theme(ctx: AppContext) {
    ctx.theme.set(theme::initial_theme());

    Effect::new(move |_| theme::apply(ctx.theme.get()));

    // use_media_query starts at `false` and reports the real value later,
    // so only changes relative to the last report are acted on
    let system_dark = use_media_query(PREFERS_DARK_QUERY);
    Effect::new(move |prev: Option<bool>| {
        let dark = system_dark.get();
        if let Some(next) = theme::follow_system(prev, dark, theme::load_saved()) {
            ctx.theme.set(next);
        }
        dark
    });
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Resolves the theme and starts the initial folder load
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    setup_theme(ctx);
    ctx.initialize();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #d9534f; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="margin: 0 0 2rem 0; color: #d9534f;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="padding: 0.75rem 2rem; cursor: pointer;"
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Browser />
        </ErrorBoundary>
    }
}
