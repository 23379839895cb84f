//! Intents
//!
//! Asynchronous operations dispatched by the presentation layer. Each one
//! runs the same lifecycle: status `loading`, remote call, then either
//! the domain actions plus `succeeded`, or a classified failure.
//!
//! The returned `Result` is only a local success signal. Failures are
//! already in the status/error store by the time the caller sees them.

use std::future::Future;
use std::rc::Rc;

use crate::action::Action;
use crate::api::{ApiError, LoginParams, TodoApi};
use crate::domain::{FilterValue, RequestStatus, Task, TaskPatch, Todolist};
use crate::error::{check_envelope, report, SyncError, SyncResult};
use crate::sequencer::{RequestKey, Ticket};
use crate::store::Store;

/// Trim a title, rejecting blank ones before anything goes remote
pub fn normalize_title(title: &str) -> SyncResult<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(SyncError::Validation("title is required".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Store plus the API it synchronizes with
pub struct Intents<A> {
    store: Store,
    api: Rc<A>,
}

impl<A> Clone for Intents<A> {
    fn clone(&self) -> Self {
        Self { store: self.store.clone(), api: self.api.clone() }
    }
}

impl<A: TodoApi> Intents<A> {
    pub fn new(store: Store, api: Rc<A>) -> Self {
        Self { store, api }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Run a remote call inside the loading/failed lifecycle.
    ///
    /// Completions from a cleared session are reported as `Superseded`
    /// without touching state.
    async fn remote<T>(&self, ticket: &Ticket, call: impl Future<Output = SyncResult<T>>) -> SyncResult<T> {
        self.store.dispatch(Action::SetStatus(RequestStatus::Loading));
        let outcome = call.await;
        if !self.store.is_current(ticket) {
            tracing::debug!("discarding completion from epoch {}", ticket.epoch);
            return Err(SyncError::Superseded);
        }
        if let Err(err) = &outcome {
            report(&self.store, err);
        }
        outcome
    }

    fn succeeded(&self) {
        self.store.dispatch(Action::SetStatus(RequestStatus::Succeeded));
    }

    /// Local precondition failures are logged, never shown
    fn reject<T>(&self, err: SyncError) -> SyncResult<T> {
        report(&self.store, &err);
        Err(err)
    }

    // ========================
    // Todolists
    // ========================

    pub async fn fetch_todolists(&self) -> SyncResult<Vec<Todolist>> {
        let ticket = self.store.track(RequestKey::AllLists);
        let lists = self.remote(&ticket, async { self.api.get_todolists().await.map_err(SyncError::from) }).await?;

        if self.store.settle(&ticket) {
            self.store.dispatch(Action::TodolistsFetched(lists.clone()));
        }
        self.succeeded();
        Ok(lists)
    }

    pub async fn create_todolist(&self, title: &str) -> SyncResult<Todolist> {
        let title = match normalize_title(title) {
            Ok(title) => title,
            Err(err) => return self.reject(err),
        };

        let ticket = self.store.untracked();
        let list = self
            .remote(&ticket, async {
                check_envelope(self.api.create_todolist(&title).await).and_then(|data| {
                    data.item.ok_or_else(|| SyncError::from(ApiError::Decode("create todolist returned no item".into())))
                })
            })
            .await?;

        self.store.dispatch(Action::TodolistAdded(list.clone()));
        self.succeeded();
        Ok(list)
    }

    pub async fn rename_todolist(&self, id: &str, title: &str) -> SyncResult<()> {
        if !self.store.with_state(|s| s.lists.contains(id)) {
            return self.reject(SyncError::TodolistNotFound(id.to_string()));
        }
        let title = match normalize_title(title) {
            Ok(title) => title,
            Err(err) => return self.reject(err),
        };

        let ticket = self.store.track(RequestKey::List(id.to_string()));
        self.remote(&ticket, async { check_envelope(self.api.update_todolist_title(id, &title).await) })
            .await?;

        if self.store.settle(&ticket) {
            self.store.dispatch(Action::TodolistTitleChanged { id: id.to_string(), title });
        }
        self.succeeded();
        Ok(())
    }

    pub async fn remove_todolist(&self, id: &str) -> SyncResult<()> {
        let Some(previous) = self.store.with_state(|s| s.lists.get(id).map(|tl| tl.entity_status)) else {
            return self.reject(SyncError::TodolistNotFound(id.to_string()));
        };

        let ticket = self.store.untracked();
        self.store.dispatch(Action::TodolistEntityStatusChanged {
            id: id.to_string(),
            status: RequestStatus::Loading,
        });

        let outcome = self.remote(&ticket, async { check_envelope(self.api.delete_todolist(id).await) }).await;
        match outcome {
            Ok(_) => {
                self.store.dispatch(Action::TodolistRemoved { id: id.to_string() });
                self.succeeded();
                Ok(())
            }
            Err(SyncError::Superseded) => Err(SyncError::Superseded),
            Err(err) => {
                self.store.dispatch(Action::TodolistEntityStatusChanged { id: id.to_string(), status: previous });
                Err(err)
            }
        }
    }

    /// Client-only; unknown ids are ignored
    pub fn set_filter(&self, id: &str, filter: FilterValue) {
        self.store.dispatch(Action::FilterChanged { id: id.to_string(), filter });
    }

    // ========================
    // Tasks
    // ========================

    pub async fn fetch_tasks(&self, todolist_id: &str) -> SyncResult<Vec<Task>> {
        let ticket = self.store.track(RequestKey::Bucket(todolist_id.to_string()));
        let tasks = self
            .remote(&ticket, async {
                match self.api.get_tasks(todolist_id).await {
                    Err(err) => Err(SyncError::from(err)),
                    Ok(response) => match response.error {
                        Some(message) => Err(SyncError::Domain(message)),
                        None => Ok(response.items),
                    },
                }
            })
            .await?;

        if self.store.settle(&ticket) {
            self.store.dispatch(Action::TasksFetched { todolist_id: todolist_id.to_string(), tasks: tasks.clone() });
        }
        self.succeeded();
        Ok(tasks)
    }

    pub async fn add_task(&self, todolist_id: &str, title: &str) -> SyncResult<Task> {
        let title = match normalize_title(title) {
            Ok(title) => title,
            Err(err) => return self.reject(err),
        };
        if self.store.with_state(|s| s.tasks.bucket(todolist_id).is_none()) {
            return self.reject(SyncError::TodolistNotFound(todolist_id.to_string()));
        }

        let ticket = self.store.untracked();
        let task = self
            .remote(&ticket, async {
                check_envelope(self.api.create_task(todolist_id, &title).await).and_then(|data| {
                    data.item.ok_or_else(|| SyncError::from(ApiError::Decode("create task returned no item".into())))
                })
            })
            .await?;

        self.store.dispatch(Action::TaskAdded(task.clone()));
        self.succeeded();
        Ok(task)
    }

    /// Removing a task that is not in local state is a silent no-op
    pub async fn remove_task(&self, todolist_id: &str, task_id: &str) -> SyncResult<()> {
        if self.store.with_state(|s| s.tasks.find(todolist_id, task_id).is_none()) {
            tracing::debug!("remove of unknown task {} in {} skipped", task_id, todolist_id);
            return Ok(());
        }

        let ticket = self.store.untracked();
        self.remote(&ticket, async { check_envelope(self.api.delete_task(todolist_id, task_id).await) })
            .await?;

        self.store.dispatch(Action::TaskRemoved {
            todolist_id: todolist_id.to_string(),
            task_id: task_id.to_string(),
        });
        self.succeeded();
        Ok(())
    }

    /// Send the full task with `patch` on top; apply only the patch locally
    pub async fn update_task(&self, todolist_id: &str, task_id: &str, patch: TaskPatch) -> SyncResult<()> {
        let Some(current) = self.store.with_state(|s| s.tasks.find(todolist_id, task_id).cloned()) else {
            return self.reject(SyncError::TaskNotFound {
                todolist_id: todolist_id.to_string(),
                task_id: task_id.to_string(),
            });
        };
        let model = patch.merge_into_model(&current);

        let ticket = self.store.track(RequestKey::Task {
            todolist_id: todolist_id.to_string(),
            task_id: task_id.to_string(),
        });
        self.remote(&ticket, async { check_envelope(self.api.update_task(todolist_id, task_id, &model).await) })
            .await?;

        if self.store.settle(&ticket) {
            self.store.dispatch(Action::TaskUpdated {
                todolist_id: todolist_id.to_string(),
                task_id: task_id.to_string(),
                patch,
            });
        }
        self.succeeded();
        Ok(())
    }

    pub async fn toggle_task(&self, todolist_id: &str, task_id: &str, is_done: bool) -> SyncResult<()> {
        self.update_task(todolist_id, task_id, TaskPatch::done(is_done)).await
    }

    pub async fn rename_task(&self, todolist_id: &str, task_id: &str, title: &str) -> SyncResult<()> {
        let title = match normalize_title(title) {
            Ok(title) => title,
            Err(err) => return self.reject(err),
        };
        self.update_task(todolist_id, task_id, TaskPatch::title(title)).await
    }

    // ========================
    // Session
    // ========================

    /// Lists first, then each list's tasks in turn
    pub async fn refresh_all(&self) -> SyncResult<()> {
        let lists = self.fetch_todolists().await?;
        tracing::info!("hydrating {} todolists", lists.len());
        for list in &lists {
            // Other failures are already reported; keep loading the rest
            if let Err(SyncError::Superseded) = self.fetch_tasks(&list.id).await {
                return Err(SyncError::Superseded);
            }
        }
        Ok(())
    }

    pub async fn login(&self, params: &LoginParams) -> SyncResult<()> {
        let ticket = self.store.untracked();
        self.remote(&ticket, async { check_envelope(self.api.login(params).await) }).await?;

        tracing::info!("logged in as {}", params.email);
        self.store.dispatch(Action::SetLoggedIn(true));
        self.succeeded();
        // Hydration failures surface through the status store
        let _ = self.refresh_all().await;
        Ok(())
    }

    /// Clears both stores on success, invalidating in-flight completions
    pub async fn logout(&self) -> SyncResult<()> {
        let ticket = self.store.untracked();
        self.remote(&ticket, async { check_envelope(self.api.logout().await) }).await?;

        tracing::info!("logged out");
        self.store.dispatch(Action::SetLoggedIn(false));
        self.store.dispatch(Action::ClearAll);
        self.succeeded();
        Ok(())
    }

    /// Start-up session probe. Marks the app initialized whatever the outcome.
    pub async fn initialize_app(&self) -> SyncResult<()> {
        let ticket = self.store.untracked();
        self.store.dispatch(Action::SetStatus(RequestStatus::Loading));
        let outcome = self.api.me().await;
        if !self.store.is_current(&ticket) {
            return Err(SyncError::Superseded);
        }

        let logged_in = match outcome {
            Ok(envelope) => envelope.is_ok(),
            Err(err) => {
                self.store.dispatch(Action::SetInitialized(true));
                let err = SyncError::from(err);
                report(&self.store, &err);
                return Err(err);
            }
        };

        self.store.dispatch(Action::SetLoggedIn(logged_in));
        self.store.dispatch(Action::SetInitialized(true));
        self.succeeded();

        if logged_in {
            let _ = self.refresh_all().await;
        }
        Ok(())
    }

    pub fn dismiss_error(&self) {
        self.store.dispatch(Action::SetError(None));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title("  Groceries \n").unwrap(), "Groceries");
        assert!(matches!(normalize_title(""), Err(SyncError::Validation(_))));
        assert!(matches!(normalize_title(" \t "), Err(SyncError::Validation(_))));
    }
}
