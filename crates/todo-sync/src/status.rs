//! Status/Error Store
//!
//! One global record driving the progress bar and the error banner.

use crate::action::Action;
use crate::domain::RequestStatus;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusState {
    pub status: RequestStatus,
    pub error: Option<String>,
    /// Set once the start-up session probe has answered
    pub is_initialized: bool,
}

pub fn reduce(state: &mut StatusState, action: &Action) {
    match action {
        Action::SetStatus(status) => state.status = *status,
        Action::SetError(error) => state.error = error.clone(),
        Action::SetInitialized(value) => state.is_initialized = *value,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_error_are_independent() {
        let mut state = StatusState::default();
        reduce(&mut state, &Action::SetStatus(RequestStatus::Failed));
        reduce(&mut state, &Action::SetError(Some("boom".into())));
        reduce(&mut state, &Action::SetStatus(RequestStatus::Loading));

        assert_eq!(state.status, RequestStatus::Loading);
        assert_eq!(state.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_ignores_domain_actions() {
        let mut state = StatusState::default();
        reduce(&mut state, &Action::ClearAll);
        assert_eq!(state, StatusState::default());
    }
}
