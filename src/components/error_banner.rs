//! Error Banner Component
//!
//! Shows the last failure from the status store. Dismissed by hand or
//! after a timeout.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::ERROR_BANNER_TIMEOUT_MS;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    Effect::new(move |_| {
        if let Some(message) = store.error().get() {
            spawn_local(async move {
                TimeoutFuture::new(ERROR_BANNER_TIMEOUT_MS).await;
                // A newer error gets its own full timeout
                if store.error().get_untracked().as_deref() == Some(message.as_str()) {
                    ctx.dismiss_error();
                }
            });
        }
    });

    view! {
        {move || store.error().get().map(|message| view! {
            <div class="error-banner" role="alert">
                <span class="error-text">{message}</span>
                <button class="error-close" on:click=move |_| ctx.dismiss_error()>"×"</button>
            </div>
        })}
    }
}
