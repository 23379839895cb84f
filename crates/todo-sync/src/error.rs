//! Error Classification
//!
//! Turns API outcomes into `SyncError`s and reports the user-facing ones
//! to the status/error store.

use std::fmt;

use crate::action::Action;
use crate::api::{ApiError, ApiResult, ResponseEnvelope};
use crate::domain::RequestStatus;
use crate::store::Store;

/// Shown when the server rejects a request without saying why
pub const DEFAULT_ERROR_MESSAGE: &str = "Some error occurred";

#[derive(Debug, Clone, PartialEq)]
pub enum SyncError {
    /// Server answered with a non-zero `resultCode`
    Domain(String),
    /// The request never produced a usable envelope
    Network(String),
    /// Rejected locally before any remote call
    Validation(String),
    TodolistNotFound(String),
    TaskNotFound { todolist_id: String, task_id: String },
    /// Completion arrived after the session was cleared
    Superseded,
}

impl SyncError {
    /// Build a domain error from server messages: the first one wins, the
    /// default only when the server sent none
    pub fn from_messages(messages: &[String]) -> Self {
        let message = messages.first().cloned().unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
        SyncError::Domain(message)
    }

    /// Message for the error banner; `None` for errors users never see
    pub fn banner_message(&self) -> Option<String> {
        match self {
            SyncError::Domain(_) | SyncError::Network(_) => Some(self.to_string()),
            _ => None,
        }
    }

    /// Local-consistency conditions are logged and otherwise ignored
    pub fn is_local(&self) -> bool {
        matches!(self, SyncError::TodolistNotFound(_) | SyncError::TaskNotFound { .. } | SyncError::Superseded)
    }
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Domain(msg) => write!(f, "{}", msg),
            SyncError::Network(detail) if detail.is_empty() => write!(f, "Network error: {}", DEFAULT_ERROR_MESSAGE),
            SyncError::Network(detail) => write!(f, "Network error: {}", detail),
            SyncError::Validation(msg) => write!(f, "Invalid input: {}", msg),
            SyncError::TodolistNotFound(id) => write!(f, "todolist {} not found in local state", id),
            SyncError::TaskNotFound { todolist_id, task_id } => {
                write!(f, "task {} not found in local state (todolist {})", task_id, todolist_id)
            }
            SyncError::Superseded => write!(f, "response arrived after the session was cleared"),
        }
    }
}

impl std::error::Error for SyncError {}

impl From<ApiError> for SyncError {
    fn from(err: ApiError) -> Self {
        SyncError::Network(err.to_string())
    }
}

pub type SyncResult<T> = Result<T, SyncError>;

/// Unwrap an envelope, classifying transport and domain failures
pub fn check_envelope<D>(result: ApiResult<ResponseEnvelope<D>>) -> SyncResult<D> {
    let envelope = result?;
    if envelope.is_ok() {
        Ok(envelope.data)
    } else {
        Err(SyncError::from_messages(&envelope.messages))
    }
}

/// Push a failure into the status/error store
pub fn report(store: &Store, err: &SyncError) {
    match err.banner_message() {
        Some(message) => {
            tracing::warn!("request failed: {}", message);
            store.dispatch(Action::SetError(Some(message)));
            store.dispatch(Action::SetStatus(RequestStatus::Failed));
        }
        None if err.is_local() => tracing::warn!("{}", err),
        None => tracing::debug!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Empty;

    #[test]
    fn test_first_message_wins() {
        let err = SyncError::from_messages(&["title required".into(), "too long".into()]);
        assert_eq!(err, SyncError::Domain("title required".into()));

        // Taken as sent, even when blank
        let err = SyncError::from_messages(&["".into(), "too long".into()]);
        assert_eq!(err, SyncError::Domain(String::new()));
    }

    #[test]
    fn test_default_message_when_server_is_silent() {
        let err = check_envelope::<Empty>(Ok(ResponseEnvelope::rejected(1, &[]))).unwrap_err();
        assert_eq!(err.to_string(), DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn test_transport_failure_is_network_error() {
        let err = check_envelope::<Empty>(Err(ApiError::Http { status: 503, message: "Service Unavailable".into() }))
            .unwrap_err();
        assert_eq!(err.banner_message().unwrap(), "Network error: HTTP 503: Service Unavailable");
    }

    #[test]
    fn test_report_marks_store_failed() {
        let store = Store::new();
        report(&store, &SyncError::Domain("title required".into()));

        let app = store.snapshot().app;
        assert_eq!(app.status, RequestStatus::Failed);
        assert_eq!(app.error.as_deref(), Some("title required"));
    }

    #[test]
    fn test_local_errors_stay_out_of_the_banner() {
        let store = Store::new();
        report(&store, &SyncError::TaskNotFound { todolist_id: "tl1".into(), task_id: "t9".into() });
        report(&store, &SyncError::Validation("title is required".into()));
        assert_eq!(store.snapshot().app, Default::default());
    }
}
