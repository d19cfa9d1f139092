//! Random forest regression.
//!
//! A small, domain-agnostic bagging regressor: CART trees grown on
//! bootstrap resamples, averaged at prediction time. Every random draw
//! flows from a single `u64` seed, so a fixed seed and config always give
//! bit-identical predictions.
//!
//! # Key Types
//!
//! - [`Dataset`]: rectangular feature rows plus labels
//! - [`ForestConfig`]: ensemble size, tree limits, bootstrap, seed
//! - [`RegressionTree`]: a single fitted CART tree
//! - [`RandomForest`]: the fitted ensemble
//!
//! # References
//!
//! - Breiman (1996), "Bagging Predictors"
//! - Breiman (2001), "Random Forests"

mod config;
mod model;
mod tree;
mod types;

pub use config::ForestConfig;
pub use model::RandomForest;
pub use tree::RegressionTree;
pub use types::Dataset;
