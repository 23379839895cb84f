//! Todolist Frontend App
//!
//! Wires the sync layer to the reactive store and picks the top-level view.

use std::rc::Rc;

use leptos::prelude::*;
use todo_sync::{Intents, Store as SyncStore};

use crate::api::HttpTodoApi;
use crate::components::{ErrorBanner, LoginForm, TitleBar, TodolistsPage};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::store::{store_apply_snapshot, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_env();
    tracing::info!(base_url = %config.base_url, "starting todolist app");

    let sync_store = SyncStore::new();
    let intents = Intents::new(sync_store.clone(), Rc::new(HttpTodoApi::new(config)));

    // Mirror every dispatch into the reactive store
    let store: AppStore = AppStore::new(AppState::default());
    store_apply_snapshot(&store, &sync_store.snapshot());
    sync_store.subscribe(move |state| store_apply_snapshot(&store, state));

    let ctx = AppContext::new(intents);
    provide_context(store);
    provide_context(ctx);

    // Probe the session once on mount
    ctx.run(|intents| async move {
        let _ = intents.initialize_app().await;
    });

    view! {
        <div class="app-layout">
            <TitleBar />
            <ErrorBanner />
            <main class="main-content">
                <Show
                    when=move || store.is_initialized().get()
                    fallback=|| view! { <div class="loader">"Loading..."</div> }
                >
                    <Show
                        when=move || store.is_logged_in().get()
                        fallback=|| view! { <LoginForm /> }
                    >
                        <TodolistsPage />
                    </Show>
                </Show>
            </main>
        </div>
    }
}
