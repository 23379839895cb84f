//! Domain Layer - Core Entity Trait
//!
//! Every record the server hands out is identified by an opaque string id.

use serde::{Deserialize, Serialize};

/// Core trait for all synchronized entities
pub trait Entity: Clone {
    /// Returns the entity's server-assigned identifier
    fn id(&self) -> &str;
}

/// Lifecycle of a remote request, used both globally and per list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl RequestStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestStatus::Loading)
    }
}

/// Find the index of an entity by id
pub(crate) fn position_of<T: Entity>(entities: &[T], id: &str) -> Option<usize> {
    entities.iter().position(|e| e.id() == id)
}
