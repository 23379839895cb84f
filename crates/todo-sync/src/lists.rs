//! List Store
//!
//! Ordered collection of todolists, most recent first.

use crate::action::Action;
use crate::domain::entity::position_of;
use crate::domain::Todolist;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListsState {
    pub todolists: Vec<Todolist>,
}

impl ListsState {
    pub fn get(&self, id: &str) -> Option<&Todolist> {
        self.todolists.iter().find(|tl| tl.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Todolist> {
        self.todolists.iter_mut().find(|tl| tl.id == id)
    }
}

pub fn reduce(state: &mut ListsState, action: &Action) {
    match action {
        Action::TodolistsFetched(lists) => {
            state.todolists = lists.iter().cloned().map(Todolist::with_client_defaults).collect();
        }
        Action::TodolistAdded(list) => {
            if let Some(index) = position_of(&state.todolists, &list.id) {
                state.todolists.remove(index);
            }
            state.todolists.insert(0, list.clone().with_client_defaults());
        }
        Action::TodolistRemoved { id } => {
            if let Some(index) = position_of(&state.todolists, id) {
                state.todolists.remove(index);
            }
        }
        Action::TodolistTitleChanged { id, title } => {
            if let Some(list) = state.get_mut(id) {
                list.title = title.clone();
            }
        }
        Action::FilterChanged { id, filter } => {
            if let Some(list) = state.get_mut(id) {
                list.filter = *filter;
            }
        }
        Action::TodolistEntityStatusChanged { id, status } => {
            if let Some(list) = state.get_mut(id) {
                list.entity_status = *status;
            }
        }
        Action::ClearAll => state.todolists.clear(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FilterValue, RequestStatus};
    use chrono::NaiveDate;

    fn make_list(id: &str, title: &str) -> Todolist {
        let added = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
        Todolist::new(id, title, added, 0)
    }

    fn two_lists() -> ListsState {
        ListsState { todolists: vec![make_list("tl1", "What to learn"), make_list("tl2", "What to buy")] }
    }

    #[test]
    fn test_added_list_goes_first_with_default_filter() {
        let mut state = two_lists();
        let mut incoming = make_list("tl3", "New");
        incoming.filter = FilterValue::Completed;

        reduce(&mut state, &Action::TodolistAdded(incoming));

        assert_eq!(state.todolists.len(), 3);
        assert_eq!(state.todolists[0].id, "tl3");
        assert_eq!(state.todolists[0].filter, FilterValue::All);
    }

    #[test]
    fn test_added_list_with_known_id_moves_to_front() {
        let mut state = two_lists();
        reduce(&mut state, &Action::TodolistAdded(make_list("tl2", "What to buy")));

        let ids: Vec<_> = state.todolists.iter().map(|tl| tl.id.as_str()).collect();
        assert_eq!(ids, ["tl2", "tl1"]);
    }

    #[test]
    fn test_fetched_lists_replace_collection() {
        let mut state = two_lists();
        reduce(&mut state, &Action::FilterChanged { id: "tl1".into(), filter: FilterValue::Active });

        let mut fetched = make_list("tl9", "Fresh");
        fetched.entity_status = RequestStatus::Loading;
        reduce(&mut state, &Action::TodolistsFetched(vec![fetched]));

        assert_eq!(state.todolists.len(), 1);
        assert_eq!(state.todolists[0].filter, FilterValue::All);
        assert_eq!(state.todolists[0].entity_status, RequestStatus::Idle);
    }

    #[test]
    fn test_rename_in_place() {
        let mut state = two_lists();
        reduce(&mut state, &Action::TodolistTitleChanged { id: "tl2".into(), title: "Shopping".into() });
        assert_eq!(state.todolists[1].title, "Shopping");
        assert_eq!(state.todolists[0].title, "What to learn");
    }

    #[test]
    fn test_filter_on_unknown_id_is_noop() {
        let mut state = two_lists();
        let before = state.clone();
        reduce(&mut state, &Action::FilterChanged { id: "nope".into(), filter: FilterValue::Completed });
        assert_eq!(state, before);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut state = two_lists();
        reduce(&mut state, &Action::TodolistRemoved { id: "tl1".into() });
        assert_eq!(state.todolists.len(), 1);
        assert_eq!(state.todolists[0].id, "tl2");

        reduce(&mut state, &Action::ClearAll);
        assert!(state.todolists.is_empty());
    }
}
