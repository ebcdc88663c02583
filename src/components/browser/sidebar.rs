//! Folder sidebar.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::empty_state::{EmptyState, Loading};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_TAGLINE, messages};
use crate::models::{Folder, Loadable};

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// Folder list with per-folder file counts.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let folders = Memo::new(move |_| ctx.browser.with(|s| s.folders().clone()));

    view! {
        <nav class=css::sidebar aria-label="Folders">
            <div class=css::brand>
                <span class=css::brandName>{APP_NAME}</span>
                <span class=css::brandTagline>{APP_TAGLINE}</span>
            </div>
            {move || match folders.get() {
                Loadable::Idle | Loadable::Loading => view! { <Loading /> }.into_any(),
                Loadable::Failed => view! {
                    <EmptyState message=messages::LOAD_FAILED error=true />
                }.into_any(),
                Loadable::Ready(list) if list.is_empty() => view! {
                    <EmptyState message=messages::NO_FOLDERS />
                }.into_any(),
                Loadable::Ready(list) => view! {
                    <ul class=css::folderList>
                        {list
                            .into_iter()
                            .map(|folder| view! { <FolderItem folder=folder /> })
                            .collect_view()}
                    </ul>
                }.into_any(),
            }}
        </nav>
    }
}

#[component]
fn FolderItem(folder: Folder) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let name = folder.name.clone();
    let name_for_active = folder.name.clone();
    let name_for_count = folder.name.clone();

    let is_active = Signal::derive(move || {
        ctx.browser
            .with(|s| s.displayed_folder() == Some(name_for_active.as_str()))
    });

    // Blank until the count pass or a selection fills it in
    let count = Signal::derive(move || {
        ctx.browser
            .with(|s| s.folder_count(&name_for_count))
            .map(|n| n.to_string())
            .unwrap_or_default()
    });

    let item_class = move || {
        if is_active.get() {
            format!("{} {}", css::folderItem, css::active)
        } else {
            css::folderItem.to_string()
        }
    };

    view! {
        <li
            class=item_class
            on:click=move |_| ctx.select_folder(name.clone())
            role="button"
            tabindex="0"
            aria-label=format!("Folder: {}", folder.display_name)
            aria-pressed=move || is_active.get().to_string()
        >
            <span class=css::folderIcon aria-hidden="true"><Icon icon=ic::FOLDER /></span>
            <span class=css::folderName>{folder.display_name.clone()}</span>
            <span class=css::folderCount>{count}</span>
        </li>
    }
}
