//! Weighted-sum priority formula.

use super::types::{PriorityScorer, ScoreSource};

/// Weight applied to urgency.
pub const URGENCY_WEIGHT: f64 = 0.4;
/// Weight applied to importance.
pub const IMPORTANCE_WEIGHT: f64 = 0.4;
/// Weight applied to effort.
pub const EFFORT_WEIGHT: f64 = 0.2;

/// `urgency * 0.4 + importance * 0.4 + effort * 0.2`.
///
/// No range checks: any finite or non-finite input passes straight through.
pub fn weighted_score(urgency: f64, importance: f64, effort: f64) -> f64 {
    urgency * URGENCY_WEIGHT + importance * IMPORTANCE_WEIGHT + effort * EFFORT_WEIGHT
}

/// [`PriorityScorer`] backed by [`weighted_score`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedFormula;

impl PriorityScorer for WeightedFormula {
    fn name(&self) -> &str {
        "WeightedFormula"
    }

    fn source(&self) -> ScoreSource {
        ScoreSource::Formula
    }

    fn score(&self, urgency: f64, importance: f64, effort: f64) -> f64 {
        weighted_score(urgency, importance, effort)
    }
}
