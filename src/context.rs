//! Application Context
//!
//! Shared handle to the sync layer's intents, provided via Leptos Context API.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::{FilterValue, Intents};

use crate::api::HttpTodoApi;

pub type AppIntents = Intents<HttpTodoApi>;

/// App-wide handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Intents live on the UI thread only
    intents: StoredValue<AppIntents, LocalStorage>,
}

impl AppContext {
    pub fn new(intents: AppIntents) -> Self {
        Self { intents: StoredValue::new_local(intents) }
    }

    /// Run an async intent in the background; its outcome lands in the store
    pub fn run<F, Fut>(&self, f: F)
    where
        F: FnOnce(AppIntents) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        let intents = self.intents.get_value();
        spawn_local(f(intents));
    }

    pub fn set_filter(&self, todolist_id: &str, filter: FilterValue) {
        self.intents.with_value(|intents| intents.set_filter(todolist_id, filter));
    }

    pub fn dismiss_error(&self) {
        self.intents.with_value(|intents| intents.dismiss_error());
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
