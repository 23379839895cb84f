//! Todolist State Synchronization
//!
//! Client-side mirror of a remote todolist backend:
//! - domain: todolists, tasks and the client-only view state on them
//! - api: the `TodoApi` seam and its wire types
//! - lists / tasks / status / auth: one reducer per slice of state
//! - store: the shared state tree, dispatch and subscriptions
//! - intents: async operations with the loading → succeeded/failed lifecycle
//!
//! Everything is single-threaded; the store is an `Rc` handle and no
//! borrow is held across a remote call.

pub mod action;
pub mod api;
pub mod auth;
pub mod domain;
pub mod error;
pub mod intents;
pub mod lists;
pub mod sequencer;
pub mod status;
pub mod store;
pub mod tasks;


pub use action::Action;
pub use api::{ApiError, ApiResult, LoginParams, ResponseEnvelope, TodoApi};
pub use domain::{FilterValue, RequestStatus, Task, TaskPatch, TaskPriority, TaskStatus, Todolist};
pub use error::{SyncError, SyncResult, DEFAULT_ERROR_MESSAGE};
pub use intents::Intents;
pub use store::{Store, Subscription, SyncState};
