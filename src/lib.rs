//! Personal task prioritization.
//!
//! Tasks carry three inputs (urgency, importance, effort) and a derived
//! priority score:
//!
//! - **Registry**: insertion-ordered in-memory task store with
//!   first-match, partial updates.
//! - **Scoring**: a fixed weighted formula (`0.4 / 0.4 / 0.2`) applied on
//!   every create and update, plus a random-forest predictor that can
//!   re-estimate every score on demand.
//! - **Forest**: a small, seeded CART + bagging regressor with no
//!   task-specific concepts.
//! - **Prioritizer**: the front-end facade (add, list, update, refresh,
//!   recommend).
//! - **Command**: enumerated commands and a dispatcher, decoupled from any
//!   input/output medium.
//!
//! # Example
//!
//! ```
//! use u_taskprio::prioritizer::TaskPrioritizer;
//! use u_taskprio::registry::TaskUpdate;
//!
//! let mut app = TaskPrioritizer::default();
//! app.add_task("A", 5.0, 8.0, 3.0);
//! assert!((app.list_tasks()[0].priority_score - 5.8).abs() < 1e-9);
//!
//! assert!(app.update_task("A", TaskUpdate::default().with_effort(9.0)));
//! app.refresh_priorities_via_predictor();
//! let best = app.recommend_task().unwrap();
//! assert_eq!(best.name, "A");
//! ```
//!
//! Everything is single-threaded and in-memory. Hosts sharing a
//! [`TaskPrioritizer`](prioritizer::TaskPrioritizer) across threads must
//! guard it with their own lock.

pub mod command;
pub mod error;
pub mod forest;
pub mod prioritizer;
pub mod registry;
pub mod scoring;

pub use error::PrioError;
