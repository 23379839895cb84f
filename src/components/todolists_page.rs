//! Todolists Page Component
//!
//! Main view for a logged-in user.

use leptos::prelude::*;

use crate::components::{AddItemForm, TodolistView};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodolistsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let on_add_list = Callback::new(move |title: String| {
        ctx.run(move |intents| async move {
            let _ = intents.create_todolist(&title).await;
        });
    });

    view! {
        <div class="todolists-page">
            <AddItemForm on_add=on_add_list placeholder="New todolist" />
            <div class="todolists">
                <For
                    each=move || store.todolists().get()
                    key=|todolist| todolist.id.clone()
                    children=move |todolist| view! { <TodolistView todolist=todolist /> }
                />
            </div>
            <p class="list-count">{move || format!("{} lists", store.todolists().with(|lists| lists.len()))}</p>
        </div>
    }
}
