//! Placeholder shown when a region has nothing (or failed) to display.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// Centered message with an icon. `error` switches to the warning style.
#[component]
pub fn EmptyState(
    #[prop(into)] message: String,
    #[prop(optional)] error: bool,
) -> impl IntoView {
    let class = if error {
        format!("{} {}", css::emptyState, css::error)
    } else {
        css::emptyState.to_string()
    };
    let icon = if error { ic::WARNING } else { ic::INBOX };

    view! {
        <div class=class role=if error { "alert" } else { "status" }>
            <span class=css::emptyIcon aria-hidden="true"><Icon icon=icon /></span>
            <p>{message}</p>
        </div>
    }
}

/// Spinner shown while a region is loading.
#[component]
pub fn Loading() -> impl IntoView {
    view! { <div class=css::loading aria-busy="true"></div> }
}
