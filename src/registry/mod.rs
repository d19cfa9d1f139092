//! In-memory task registry.
//!
//! Holds tasks in insertion order and rescores them with the weighted
//! formula whenever they are created or updated.

mod store;
mod types;

pub use store::TaskRegistry;
pub use types::{Task, TaskUpdate};
