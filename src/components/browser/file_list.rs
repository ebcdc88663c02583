//! File list of the selected folder.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::empty_state::{EmptyState, Loading};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::messages;
use crate::models::{FileEntry, FileListView};

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let list = Memo::new(move |_| ctx.browser.with(|s| s.file_list().clone()));
    let title = Memo::new(move |_| {
        ctx.browser.with(|s| {
            s.displayed_folder()
                .map(|f| s.folder_label(f))
                .unwrap_or_default()
        })
    });
    let count_label =
        Memo::new(move |_| ctx.browser.with(|s| s.file_count_label().unwrap_or_default()));

    view! {
        <section class=css::filePane aria-label="Files">
            <header class=css::paneHeader>
                <h2 class=css::paneTitle>{move || title.get()}</h2>
                <span class=css::paneMeta>{move || count_label.get()}</span>
            </header>
            {move || match list.get() {
                FileListView::Idle => view! {
                    <EmptyState message=messages::SELECT_FOLDER />
                }.into_any(),
                FileListView::Loading { .. } => view! { <Loading /> }.into_any(),
                FileListView::Empty { .. } => view! {
                    <EmptyState message=messages::EMPTY_FOLDER />
                }.into_any(),
                FileListView::Failed { .. } => view! {
                    <EmptyState message=messages::LOAD_FAILED error=true />
                }.into_any(),
                FileListView::Ready { folder, files } => view! {
                    <ul class=css::fileList role="listbox" aria-label="Files">
                        {files
                            .into_iter()
                            .map(|file| view! { <FileItem folder=folder.clone() file=file /> })
                            .collect_view()}
                    </ul>
                }.into_any(),
            }}
        </section>
    }
}

#[component]
fn FileItem(folder: String, file: FileEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let name = file.name.clone();
    let name_for_active = file.name.clone();

    let is_active = Signal::derive(move || {
        ctx.browser
            .with(|s| s.highlighted_file() == Some(name_for_active.as_str()))
    });

    let item_class = move || {
        if is_active.get() {
            format!("{} {}", css::fileItem, css::active)
        } else {
            css::fileItem.to_string()
        }
    };

    view! {
        <li
            class=item_class
            on:click=move |_| ctx.select_file(folder.clone(), name.clone())
            role="option"
            tabindex="0"
            title=file.name.clone()
            aria-selected=move || is_active.get().to_string()
        >
            <span class=css::fileIcon aria-hidden="true"><Icon icon=ic::FILE_TEXT /></span>
            <div class=css::fileInfo>
                <div class=css::fileDate>{file.display_date.clone()}</div>
                <div class=css::fileMeta>{file.size.clone()}</div>
            </div>
        </li>
    }
}
