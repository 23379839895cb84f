//! Title Bar Component
//!
//! App header with the logout control and the global progress bar.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TitleBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let logout = move |_| {
        ctx.run(|intents| async move {
            let _ = intents.logout().await;
        });
    };

    view! {
        <header class="titlebar">
            <span class="titlebar-title">"Todolists"</span>
            <Show when=move || store.is_logged_in().get()>
                <button class="titlebar-btn logout" on:click=logout>"Log out"</button>
            </Show>
        </header>
        <Show when=move || store.status().get().is_loading()>
            <div class="progress-bar">
                <div class="progress-bar-fill"></div>
            </div>
        </Show>
    }
}
