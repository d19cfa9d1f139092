//! Core trait for priority scorers.

use std::fmt;

/// Which scoring method last wrote a task's `priority_score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoreSource {
    /// The fixed weighted-sum formula.
    #[default]
    Formula,

    /// The fitted score predictor.
    Predicted,
}

impl fmt::Display for ScoreSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreSource::Formula => f.write_str("formula"),
            ScoreSource::Predicted => f.write_str("predicted"),
        }
    }
}

/// A strategy that maps `(urgency, importance, effort)` to a priority score.
///
/// **Higher scores are higher priority.**
///
/// # Examples
///
/// ```
/// use u_taskprio::scoring::{PriorityScorer, ScoreSource, WeightedFormula};
///
/// let scorer = WeightedFormula;
/// assert_eq!(scorer.source(), ScoreSource::Formula);
/// assert!((scorer.score(5.0, 8.0, 3.0) - 5.8).abs() < 1e-9);
/// ```
pub trait PriorityScorer {
    /// Returns the name of this scorer.
    fn name(&self) -> &str;

    /// Provenance tag recorded on tasks scored by this scorer.
    fn source(&self) -> ScoreSource;

    /// Computes a priority score.
    fn score(&self, urgency: f64, importance: f64, effort: f64) -> f64;
}
