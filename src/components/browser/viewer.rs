//! Markdown content viewer.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::empty_state::{EmptyState, Loading};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::messages;
use crate::core::theme::Theme;
use crate::models::ContentView;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// Rendered file with refresh, fullscreen and theme actions.
#[component]
pub fn Viewer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let viewer_ref = NodeRef::<leptos::html::Section>::new();

    let content = Memo::new(move |_| ctx.browser.with(|s| s.content().clone()));
    let title = Memo::new(move |_| {
        ctx.browser
            .with(|s| s.displayed_entry().map(|e| e.title()).unwrap_or_default())
    });
    let has_file = Memo::new(move |_| ctx.browser.with(|s| s.current_file().is_some()));

    let toggle_fullscreen = move |_| {
        if ctx.fullscreen.get_untracked() {
            dom::exit_fullscreen();
        } else if let Some(el) = viewer_ref.get_untracked()
            && dom::request_fullscreen(&el)
        {
            ctx.fullscreen.set(true);
        }
    };

    let viewer_class = move || {
        if ctx.fullscreen.get() {
            format!("{} {}", css::viewer, css::fullscreenMode)
        } else {
            css::viewer.to_string()
        }
    };

    view! {
        <section class=viewer_class node_ref=viewer_ref aria-label="Content">
            <header class=css::viewerHeader>
                <h1 class=css::viewerTitle>{move || title.get()}</h1>
                <div class=css::actions>
                    <button
                        class=css::actionButton
                        on:click=move |_| ctx.refresh()
                        disabled=move || !has_file.get()
                        title="Refresh (Ctrl+R)"
                        aria-label="Refresh"
                    >
                        <Icon icon=ic::REFRESH />
                    </button>
                    <button
                        class=css::actionButton
                        on:click=toggle_fullscreen
                        title=move || if ctx.fullscreen.get() { "Exit fullscreen" } else { "Fullscreen" }
                        aria-label="Toggle fullscreen"
                    >
                        {move || if ctx.fullscreen.get() {
                            view! { <Icon icon=ic::FULLSCREEN_EXIT /> }
                        } else {
                            view! { <Icon icon=ic::FULLSCREEN /> }
                        }}
                    </button>
                    <span class=css::actionDivider aria-hidden="true"></span>
                    <button
                        class=css::actionButton
                        on:click=move |_| ctx.toggle_theme()
                        title=move || ctx.theme.get().toggle_hint()
                        aria-label="Toggle theme"
                    >
                        {move || match ctx.theme.get() {
                            Theme::Dark => view! { <Icon icon=ic::SUN /> },
                            Theme::Light => view! { <Icon icon=ic::MOON /> },
                        }}
                    </button>
                </div>
            </header>
            <div class=css::content>
                {move || match content.get() {
                    ContentView::Placeholder => view! {
                        <EmptyState message=messages::SELECT_FILE />
                    }.into_any(),
                    ContentView::Loading { .. } => view! { <Loading /> }.into_any(),
                    ContentView::Rendered { html, .. } => view! {
                        <article class=css::markdownBody inner_html=html></article>
                    }.into_any(),
                    ContentView::Failed { message, .. } => view! {
                        <EmptyState message=message error=true />
                    }.into_any(),
                }}
            </div>
        </section>
    }
}
