//! Priority scoring strategies.
//!
//! Two interchangeable scorers implement [`PriorityScorer`]:
//!
//! - [`WeightedFormula`]: `urgency * 0.4 + importance * 0.4 + effort * 0.2`,
//!   applied on every task creation and update.
//! - [`ScorePredictor`]: a random forest fitted once on a fixed four-row
//!   table, applied on demand via [`ScorePredictor::refresh_all`].
//!
//! Whichever scorer ran last owns a task's score. [`highest_priority`]
//! compares stored scores as-is; [`ScoreSource`] records provenance.

mod predictor;
mod types;
mod weighted;

pub use predictor::{highest_priority, ScorePredictor, DEFAULT_SEED, TRAINING_SET};
pub use types::{PriorityScorer, ScoreSource};
pub use weighted::{
    weighted_score, WeightedFormula, EFFORT_WEIGHT, IMPORTANCE_WEIGHT, URGENCY_WEIGHT,
};
