//! Item Store
//!
//! Maps each todolist id to its bucket of tasks. Buckets follow the
//! todolist lifecycle: they are created and dropped in reaction to list
//! actions, never by the list store itself.

use std::collections::HashMap;

use crate::action::Action;
use crate::domain::entity::position_of;
use crate::domain::Task;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TasksState {
    pub by_list: HashMap<String, Vec<Task>>,
}

impl TasksState {
    pub fn bucket(&self, todolist_id: &str) -> Option<&[Task]> {
        self.by_list.get(todolist_id).map(Vec::as_slice)
    }

    pub fn find(&self, todolist_id: &str, task_id: &str) -> Option<&Task> {
        self.bucket(todolist_id)?.iter().find(|t| t.id == task_id)
    }
}

pub fn reduce(state: &mut TasksState, action: &Action) {
    match action {
        Action::TasksFetched { todolist_id, tasks } => {
            // Only lists that still exist get their bucket replaced
            if let Some(bucket) = state.by_list.get_mut(todolist_id) {
                *bucket = tasks.clone();
            }
        }
        Action::TaskAdded(task) => {
            if let Some(bucket) = state.by_list.get_mut(&task.todo_list_id) {
                // Ids stay unique within a bucket
                if let Some(index) = position_of(bucket, &task.id) {
                    bucket.remove(index);
                }
                bucket.insert(0, task.clone());
            }
        }
        Action::TaskRemoved { todolist_id, task_id } => {
            if let Some(bucket) = state.by_list.get_mut(todolist_id) {
                if let Some(index) = position_of(bucket, task_id) {
                    bucket.remove(index);
                }
            }
        }
        Action::TaskUpdated { todolist_id, task_id, patch } => {
            if let Some(task) = state
                .by_list
                .get_mut(todolist_id)
                .and_then(|bucket| bucket.iter_mut().find(|t| &t.id == task_id))
            {
                patch.apply_to(task);
            }
        }

        // Reactions to the list store
        Action::TodolistAdded(list) => {
            // A list that is already known keeps its tasks
            state.by_list.entry(list.id.clone()).or_default();
        }
        Action::TodolistRemoved { id } => {
            state.by_list.remove(id);
        }
        Action::TodolistsFetched(lists) => {
            // Buckets of lists the server no longer reports would be orphans
            state.by_list = lists.iter().map(|list| (list.id.clone(), Vec::new())).collect();
        }
        Action::ClearAll => state.by_list.clear(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TaskPatch, TaskStatus, Todolist};
    use chrono::NaiveDate;

    fn make_task(id: &str, list: &str, title: &str) -> Task {
        Task::new(id, list, title)
    }

    fn make_list(id: &str) -> Todolist {
        let added = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        Todolist::new(id, "List", added, 0)
    }

    fn start_state() -> TasksState {
        let mut by_list = HashMap::new();
        by_list.insert(
            "tl1".to_string(),
            vec![make_task("1", "tl1", "CSS"), make_task("2", "tl1", "JS"), make_task("3", "tl1", "React")],
        );
        by_list.insert("tl2".to_string(), vec![make_task("1", "tl2", "bread"), make_task("2", "tl2", "milk")]);
        TasksState { by_list }
    }

    #[test]
    fn test_fetched_tasks_replace_bucket_in_server_order() {
        let mut state = start_state();
        let fetched = vec![make_task("b", "tl1", "second"), make_task("a", "tl1", "first")];
        reduce(&mut state, &Action::TasksFetched { todolist_id: "tl1".into(), tasks: fetched.clone() });
        assert_eq!(state.bucket("tl1").unwrap(), &fetched[..]);

        reduce(&mut state, &Action::TasksFetched { todolist_id: "gone".into(), tasks: fetched });
        assert!(state.bucket("gone").is_none());
    }

    #[test]
    fn test_added_task_is_prepended() {
        let mut state = start_state();
        reduce(&mut state, &Action::TaskAdded(make_task("4", "tl2", "juice")));

        let bucket = state.bucket("tl2").unwrap();
        assert_eq!(bucket.len(), 3);
        assert_eq!(bucket[0].id, "4");
        assert_eq!(state.bucket("tl1").unwrap().len(), 3);
    }

    #[test]
    fn test_added_task_without_bucket_is_dropped() {
        let mut state = start_state();
        reduce(&mut state, &Action::TaskAdded(make_task("9", "ghost", "x")));
        assert!(state.bucket("ghost").is_none());
    }

    #[test]
    fn test_remove_by_identity() {
        let mut state = start_state();
        reduce(&mut state, &Action::TaskRemoved { todolist_id: "tl2".into(), task_id: "2".into() });

        let ids: Vec<_> = state.bucket("tl2").unwrap().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
        assert_eq!(state.bucket("tl1").unwrap().len(), 3);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut state = start_state();
        let before = state.clone();
        reduce(&mut state, &Action::TaskRemoved { todolist_id: "tl1".into(), task_id: "missing-id".into() });
        reduce(&mut state, &Action::TaskRemoved { todolist_id: "nope".into(), task_id: "1".into() });
        assert_eq!(state, before);
    }

    #[test]
    fn test_update_merges_patch() {
        let mut state = start_state();
        reduce(
            &mut state,
            &Action::TaskUpdated {
                todolist_id: "tl2".into(),
                task_id: "2".into(),
                patch: TaskPatch::status(TaskStatus::Completed),
            },
        );

        let task = state.find("tl2", "2").unwrap();
        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.title, "milk");
        assert_eq!(state.find("tl1", "2").unwrap().status, TaskStatus::New);
    }

    #[test]
    fn test_list_lifecycle_reactions() {
        let mut state = start_state();

        reduce(&mut state, &Action::TodolistAdded(make_list("tl3")));
        assert!(state.bucket("tl3").is_some_and(|b| b.is_empty()));

        reduce(&mut state, &Action::TodolistRemoved { id: "tl2".into() });
        assert!(state.bucket("tl2").is_none());
        assert_eq!(state.by_list.len(), 2);

        reduce(&mut state, &Action::TodolistsFetched(vec![make_list("a"), make_list("b")]));
        assert!(state.bucket("a").is_some_and(|b| b.is_empty()));
        assert!(state.bucket("b").is_some_and(|b| b.is_empty()));
        assert!(state.bucket("tl1").is_none());

        reduce(&mut state, &Action::ClearAll);
        assert!(state.by_list.is_empty());
    }

    #[test]
    fn test_readded_list_keeps_its_bucket() {
        let mut state = start_state();
        reduce(&mut state, &Action::TodolistAdded(make_list("tl1")));

        let titles: Vec<_> = state.bucket("tl1").unwrap().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["CSS", "JS", "React"]);
    }
}
