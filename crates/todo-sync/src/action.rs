//! Store Actions
//!
//! Every state transition is one of these. Reducers match on the
//! variants they care about and ignore the rest.

use crate::domain::{FilterValue, RequestStatus, Task, TaskPatch, Todolist};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Status/error store
    SetStatus(RequestStatus),
    SetError(Option<String>),
    SetInitialized(bool),

    // Session
    SetLoggedIn(bool),

    // Todolists
    TodolistsFetched(Vec<Todolist>),
    TodolistAdded(Todolist),
    TodolistRemoved { id: String },
    TodolistTitleChanged { id: String, title: String },
    FilterChanged { id: String, filter: FilterValue },
    TodolistEntityStatusChanged { id: String, status: RequestStatus },

    // Tasks
    TasksFetched { todolist_id: String, tasks: Vec<Task> },
    TaskAdded(Task),
    TaskRemoved { todolist_id: String, task_id: String },
    TaskUpdated { todolist_id: String, task_id: String, patch: TaskPatch },

    /// Logout: drop every list and task in one transition
    ClearAll,
}

impl Action {
    /// Short name for log lines
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetStatus(_) => "app/setStatus",
            Action::SetError(_) => "app/setError",
            Action::SetInitialized(_) => "app/setInitialized",
            Action::SetLoggedIn(_) => "auth/setLoggedIn",
            Action::TodolistsFetched(_) => "todolists/fetched",
            Action::TodolistAdded(_) => "todolists/added",
            Action::TodolistRemoved { .. } => "todolists/removed",
            Action::TodolistTitleChanged { .. } => "todolists/titleChanged",
            Action::FilterChanged { .. } => "todolists/filterChanged",
            Action::TodolistEntityStatusChanged { .. } => "todolists/entityStatusChanged",
            Action::TasksFetched { .. } => "tasks/fetched",
            Action::TaskAdded(_) => "tasks/added",
            Action::TaskRemoved { .. } => "tasks/removed",
            Action::TaskUpdated { .. } => "tasks/updated",
            Action::ClearAll => "common/clearAll",
        }
    }
}
