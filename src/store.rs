//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! a read-only mirror of the sync layer's state: components never write
//! it directly, they dispatch intents and the mirror follows.

use std::collections::HashMap;

use leptos::prelude::*;
use reactive_stores::Store;
use todo_sync::{RequestStatus, SyncState, Task, Todolist};

/// UI-facing snapshot with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Todolists, most recent first
    pub todolists: Vec<Todolist>,
    /// Task buckets keyed by todolist id
    pub tasks: HashMap<String, Vec<Task>>,
    /// Global request status (drives the progress bar)
    pub status: RequestStatus,
    /// Last error for the banner
    pub error: Option<String>,
    pub is_initialized: bool,
    pub is_logged_in: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Copy a sync snapshot into the store, touching only fields that changed
pub fn store_apply_snapshot(store: &AppStore, state: &SyncState) {
    if store.todolists().with_untracked(|current| current != &state.lists.todolists) {
        *store.todolists().write() = state.lists.todolists.clone();
    }
    if store.tasks().with_untracked(|current| current != &state.tasks.by_list) {
        *store.tasks().write() = state.tasks.by_list.clone();
    }
    if store.status().get_untracked() != state.app.status {
        store.status().set(state.app.status);
    }
    if store.error().with_untracked(|current| current != &state.app.error) {
        store.error().set(state.app.error.clone());
    }
    if store.is_initialized().get_untracked() != state.app.is_initialized {
        store.is_initialized().set(state.app.is_initialized);
    }
    if store.is_logged_in().get_untracked() != state.auth.is_logged_in {
        store.is_logged_in().set(state.auth.is_logged_in);
    }
}

/// Look up a todolist by id
pub fn store_find_todolist(store: &AppStore, id: &str) -> Option<Todolist> {
    store.todolists().with(|lists| lists.iter().find(|tl| tl.id == id).cloned())
}

/// Tasks of a todolist that pass its current filter
pub fn store_visible_tasks(store: &AppStore, todolist_id: &str) -> Vec<Task> {
    let filter = store_find_todolist(store, todolist_id).map(|tl| tl.filter).unwrap_or_default();
    store.tasks().with(|by_list| {
        by_list
            .get(todolist_id)
            .map(|bucket| filter.apply(bucket).into_iter().cloned().collect())
            .unwrap_or_default()
    })
}
