//! Domain Layer
//!
//! Client-side mirrors of the server's todolist and task records,
//! plus the client-only view state attached to them.

pub(crate) mod entity;
mod todolist;
mod task;

pub use entity::{Entity, RequestStatus};
pub use todolist::{FilterValue, Todolist};
pub use task::{Task, TaskPatch, TaskPriority, TaskStatus, UpdateTaskModel};
