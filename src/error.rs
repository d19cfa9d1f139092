//! Error type shared by the scoring, forest, and prioritizer layers.

use thiserror::Error;

/// Failures surfaced by the core.
///
/// An update that matches no task is **not** an error; it is reported as
/// `false` by [`TaskRegistry::find_and_update`](crate::registry::TaskRegistry::find_and_update).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrioError {
    /// A recommendation was requested but no tasks exist.
    #[error("no tasks available to recommend")]
    EmptyRegistry,

    /// A forest configuration failed validation.
    #[error("invalid forest config: {0}")]
    InvalidConfig(String),

    /// Training data was empty, ragged, or mismatched with its labels.
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
}
