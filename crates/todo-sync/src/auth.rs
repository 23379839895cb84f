//! Session State

use crate::action::Action;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub is_logged_in: bool,
}

pub fn reduce(state: &mut AuthState, action: &Action) {
    if let Action::SetLoggedIn(value) = action {
        state.is_logged_in = *value;
    }
}
