//! Todolist Entity
//!
//! A named container of tasks. `filter` and `entity_status` never leave
//! the client.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, RequestStatus};
use super::task::Task;

/// Which tasks of a list are displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterValue {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterValue {
    pub const ALL: [FilterValue; 3] = [FilterValue::All, FilterValue::Active, FilterValue::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterValue::All => "all",
            FilterValue::Active => "active",
            FilterValue::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterValue::All => "All",
            FilterValue::Active => "Active",
            FilterValue::Completed => "Completed",
        }
    }

    /// Whether a task passes this filter
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Active => !task.is_completed(),
            FilterValue::Completed => task.is_completed(),
        }
    }

    /// Tasks passing this filter, in bucket order
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|t| self.matches(t)).collect()
    }
}

/// A todolist as mirrored on the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todolist {
    pub id: String,
    pub title: String,
    pub added_date: NaiveDateTime,
    pub order: i32,

    // Client-only fields:
    #[serde(skip)]
    pub filter: FilterValue,
    #[serde(skip)]
    pub entity_status: RequestStatus,
}

impl Todolist {
    pub fn new(id: impl Into<String>, title: impl Into<String>, added_date: NaiveDateTime, order: i32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            added_date,
            order,
            filter: FilterValue::All,
            entity_status: RequestStatus::Idle,
        }
    }

    /// Reset client-only state, as done whenever a list arrives from the server
    pub fn with_client_defaults(mut self) -> Self {
        self.filter = FilterValue::All;
        self.entity_status = RequestStatus::Idle;
        self
    }
}

impl Entity for Todolist {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskStatus;

    #[test]
    fn test_filter_is_not_part_of_the_wire_format() {
        let json = r#"{"id":"tl1","title":"Groceries","addedDate":"2024-03-01T10:15:00.123","order":-1}"#;
        let list: Todolist = serde_json::from_str(json).unwrap();
        assert_eq!(list.title, "Groceries");
        assert_eq!(list.filter, FilterValue::All);
        assert_eq!(list.entity_status, RequestStatus::Idle);

        let back = serde_json::to_value(&list).unwrap();
        assert!(back.get("filter").is_none());
        assert!(back.get("entityStatus").is_none());
    }

    #[test]
    fn test_filter_matches_by_completion() {
        let mut done = Task::new("t1", "tl1", "Milk");
        done.status = TaskStatus::Completed;
        let open = Task::new("t2", "tl1", "Bread");
        let tasks = vec![done, open];

        assert_eq!(FilterValue::All.apply(&tasks).len(), 2);
        assert_eq!(FilterValue::Active.apply(&tasks)[0].id, "t2");
        assert_eq!(FilterValue::Completed.apply(&tasks)[0].id, "t1");
    }
}
