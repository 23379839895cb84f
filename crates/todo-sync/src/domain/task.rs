//! Task Entity
//!
//! A single to-do entry owned by exactly one todolist.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Workflow status; sent over the wire as an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum TaskStatus {
    #[default]
    New = 0,
    InProgress = 1,
    Completed = 2,
    Draft = 3,
}

impl TryFrom<u8> for TaskStatus {
    type Error = UnknownDiscriminant;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TaskStatus::New),
            1 => Ok(TaskStatus::InProgress),
            2 => Ok(TaskStatus::Completed),
            3 => Ok(TaskStatus::Draft),
            other => Err(UnknownDiscriminant { kind: "task status", value: other }),
        }
    }
}

impl From<TaskStatus> for u8 {
    fn from(status: TaskStatus) -> Self {
        status as u8
    }
}

/// Task priority; sent over the wire as an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum TaskPriority {
    #[default]
    Low = 0,
    Middle = 1,
    High = 2,
    Urgent = 3,
    Later = 4,
}

impl TryFrom<u8> for TaskPriority {
    type Error = UnknownDiscriminant;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TaskPriority::Low),
            1 => Ok(TaskPriority::Middle),
            2 => Ok(TaskPriority::High),
            3 => Ok(TaskPriority::Urgent),
            4 => Ok(TaskPriority::Later),
            other => Err(UnknownDiscriminant { kind: "task priority", value: other }),
        }
    }
}

impl From<TaskPriority> for u8 {
    fn from(priority: TaskPriority) -> Self {
        priority as u8
    }
}

/// An integer on the wire that maps to no enum variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDiscriminant {
    kind: &'static str,
    value: u8,
}

impl fmt::Display for UnknownDiscriminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {}", self.kind, self.value)
    }
}

impl std::error::Error for UnknownDiscriminant {}

/// A task as mirrored on the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub todo_list_id: String,
    pub title: String,
    #[serde(default)]
    pub is_done: bool,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub added_date: Option<NaiveDateTime>,
}

impl Task {
    /// Create a fresh task with server defaults
    pub fn new(id: impl Into<String>, todo_list_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            todo_list_id: todo_list_id.into(),
            title: title.into(),
            is_done: false,
            status: TaskStatus::New,
            priority: TaskPriority::Low,
            start_date: None,
            deadline: None,
            description: None,
            order: 0,
            added_date: None,
        }
    }

    /// Done either by checkbox or by workflow status
    pub fn is_completed(&self) -> bool {
        self.is_done || self.status == TaskStatus::Completed
    }
}

impl Entity for Task {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Partial update of a task's mutable fields.
///
/// `None` means "leave as is". Fields cannot be cleared through a patch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_done: Option<bool>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub start_date: Option<String>,
    pub deadline: Option<String>,
}

impl TaskPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self { title: Some(title.into()), ..Default::default() }
    }

    pub fn status(status: TaskStatus) -> Self {
        Self { status: Some(status), ..Default::default() }
    }

    /// Checkbox toggle: keeps `is_done` and `status` in step
    pub fn done(is_done: bool) -> Self {
        Self {
            is_done: Some(is_done),
            status: Some(if is_done { TaskStatus::Completed } else { TaskStatus::New }),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == TaskPatch::default()
    }

    /// Overwrite exactly the fields present in the patch
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = Some(description.clone());
        }
        if let Some(is_done) = self.is_done {
            task.is_done = is_done;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(start_date) = &self.start_date {
            task.start_date = Some(start_date.clone());
        }
        if let Some(deadline) = &self.deadline {
            task.deadline = Some(deadline.clone());
        }
    }

    /// Full update body: the current task's values with the patch on top
    pub fn merge_into_model(&self, current: &Task) -> UpdateTaskModel {
        let mut merged = current.clone();
        self.apply_to(&mut merged);
        UpdateTaskModel::from(&merged)
    }
}

/// Body of the update-task request; the server replaces every field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskModel {
    pub title: String,
    pub description: Option<String>,
    pub is_done: bool,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub start_date: Option<String>,
    pub deadline: Option<String>,
}

impl From<&Task> for UpdateTaskModel {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            is_done: task.is_done,
            status: task.status,
            priority: task.priority,
            start_date: task.start_date.clone(),
            deadline: task.deadline.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_task() -> Task {
        Task {
            id: "t1".to_string(),
            todo_list_id: "tl1".to_string(),
            title: "Milk".to_string(),
            is_done: true,
            status: TaskStatus::InProgress,
            priority: TaskPriority::Urgent,
            start_date: Some("2024-01-01".to_string()),
            deadline: Some("2024-01-31".to_string()),
            description: Some("2 litres".to_string()),
            order: 3,
            added_date: None,
        }
    }

    #[test]
    fn test_status_wire_format_is_integer() {
        assert_eq!(serde_json::to_string(&TaskStatus::Completed).unwrap(), "2");
        assert_eq!(serde_json::from_str::<TaskPriority>("4").unwrap(), TaskPriority::Later);
        assert!(serde_json::from_str::<TaskStatus>("9").is_err());
    }

    #[test]
    fn test_task_deserializes_server_payload() {
        let json = r#"{
            "description": null, "title": "Milk", "status": 0, "priority": 1,
            "startDate": null, "deadline": null, "id": "t1", "todoListId": "tl1",
            "order": -2, "addedDate": "2024-03-01T10:15:00.5"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.todo_list_id, "tl1");
        assert_eq!(task.priority, TaskPriority::Middle);
        assert!(!task.is_done);
        assert!(task.added_date.is_some());
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let mut task = full_task();
        let before = task.clone();
        TaskPatch::default().apply_to(&mut task);
        assert_eq!(task, before);
        assert!(TaskPatch::default().is_empty());
    }

    #[test]
    fn test_patch_touches_only_present_fields() {
        // Every single-field patch, against a fully populated task
        let patches = vec![
            TaskPatch::title("Oat milk"),
            TaskPatch { description: Some("1 litre".into()), ..Default::default() },
            TaskPatch { is_done: Some(false), ..Default::default() },
            TaskPatch::status(TaskStatus::Draft),
            TaskPatch { priority: Some(TaskPriority::Low), ..Default::default() },
            TaskPatch { start_date: Some("2024-02-01".into()), ..Default::default() },
            TaskPatch { deadline: Some("2024-02-28".into()), ..Default::default() },
        ];

        for patch in patches {
            let before = full_task();
            let mut after = before.clone();
            patch.apply_to(&mut after);

            assert_eq!(after.id, before.id);
            assert_eq!(after.todo_list_id, before.todo_list_id);
            assert_eq!(after.order, before.order);
            if patch.title.is_none() { assert_eq!(after.title, before.title); }
            if patch.description.is_none() { assert_eq!(after.description, before.description); }
            if patch.is_done.is_none() { assert_eq!(after.is_done, before.is_done); }
            if patch.status.is_none() { assert_eq!(after.status, before.status); }
            if patch.priority.is_none() { assert_eq!(after.priority, before.priority); }
            if patch.start_date.is_none() { assert_eq!(after.start_date, before.start_date); }
            if patch.deadline.is_none() { assert_eq!(after.deadline, before.deadline); }
        }
    }

    #[test]
    fn test_merge_into_model_keeps_current_values() {
        let task = full_task();
        let model = TaskPatch::status(TaskStatus::Completed).merge_into_model(&task);

        assert_eq!(model.status, TaskStatus::Completed);
        assert_eq!(model.title, "Milk");
        assert_eq!(model.priority, TaskPriority::Urgent);
        assert_eq!(model.description.as_deref(), Some("2 litres"));
        assert_eq!(model.deadline.as_deref(), Some("2024-01-31"));
    }

    #[test]
    fn test_done_patch_moves_status_with_checkbox() {
        let mut task = Task::new("t1", "tl1", "Milk");
        TaskPatch::done(true).apply_to(&mut task);
        assert!(task.is_done);
        assert_eq!(task.status, TaskStatus::Completed);

        TaskPatch::done(false).apply_to(&mut task);
        assert!(!task.is_completed());
    }
}
