//! Three-pane browser layout.

use leptos::prelude::*;

use super::{FileList, Sidebar, Viewer};
use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// Sidebar, file list and viewer side by side.
///
/// Installs the document-level keyboard and fullscreen listeners once on mount.
#[component]
pub fn Browser() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    #[cfg(target_arch = "wasm32")]
    install_listeners(ctx);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = ctx;

    view! {
        <main class=css::browser>
            <Sidebar />
            <FileList />
            <Viewer />
        </main>
    }
}

#[cfg(target_arch = "wasm32")]
fn install_listeners(ctx: AppContext) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::Closure;

    use crate::core::keyboard::{self, KeyAction};
    use crate::utils::dom;

    let Some(document) = dom::window().and_then(|w| w.document()) else {
        return;
    };

    let on_keydown = Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
        let in_text_input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .is_some_and(|el| keyboard::is_text_input(&el.tag_name()));
        if in_text_input {
            return;
        }

        let Some(action) = keyboard::key_action(&ev.key(), ev.ctrl_key(), ev.meta_key()) else {
            return;
        };
        // Ctrl/Cmd+R would otherwise reload the whole page
        if action == KeyAction::Refresh {
            ev.prevent_default();
        }
        ctx.handle_key(action);
    }) as Box<dyn Fn(web_sys::KeyboardEvent)>);

    let on_fullscreen_change = Closure::wrap(Box::new(move || {
        ctx.fullscreen.set(dom::is_fullscreen());
    }) as Box<dyn Fn()>);

    let _ = document
        .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    let _ = document.add_event_listener_with_callback(
        "fullscreenchange",
        on_fullscreen_change.as_ref().unchecked_ref(),
    );

    // Listeners live as long as the app
    on_keydown.forget();
    on_fullscreen_change.forget();
}
