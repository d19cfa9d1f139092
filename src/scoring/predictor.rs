//! Random-forest score predictor and recommendation.

use tracing::{debug, info};

use super::types::{PriorityScorer, ScoreSource};
use crate::error::PrioError;
use crate::forest::{Dataset, ForestConfig, RandomForest};
use crate::registry::Task;

/// Seed used by [`ScorePredictor::new`].
pub const DEFAULT_SEED: u64 = 42;

/// Fixed training table: `(urgency, importance, effort, priority)`.
pub const TRAINING_SET: [(f64, f64, f64, f64); 4] = [
    (5.0, 8.0, 3.0, 8.5),
    (9.0, 10.0, 2.0, 9.2),
    (3.0, 4.0, 8.0, 6.0),
    (7.0, 6.0, 5.0, 7.5),
];

fn training_dataset() -> Result<Dataset, PrioError> {
    let (features, labels): (Vec<Vec<f64>>, Vec<f64>) = TRAINING_SET
        .iter()
        .map(|&(u, i, e, y)| (vec![u, i, e], y))
        .unzip();
    Dataset::new(features, labels)
}

/// Re-estimates priority scores with a forest fitted once on
/// [`TRAINING_SET`].
///
/// There is no retraining: the model is frozen after construction.
#[derive(Debug, Clone)]
pub struct ScorePredictor {
    model: RandomForest,
}

impl ScorePredictor {
    /// Fits with the default forest config and [`DEFAULT_SEED`].
    ///
    /// # Panics
    /// Panics if the default config or [`TRAINING_SET`] fails validation
    /// (use [`with_config`](Self::with_config) to get the error instead).
    pub fn new() -> Self {
        Self::with_config(ForestConfig::default().with_seed(DEFAULT_SEED))
            .expect("default forest config must fit the training table")
    }

    /// Fits with a custom forest config.
    pub fn with_config(config: ForestConfig) -> Result<Self, PrioError> {
        let model = RandomForest::fit(&training_dataset()?, &config)?;
        info!(
            n_trees = model.n_trees(),
            seed = model.seed(),
            "score predictor ready"
        );
        Ok(Self { model })
    }

    /// Predicted priority for one set of inputs.
    pub fn predict(&self, urgency: f64, importance: f64, effort: f64) -> f64 {
        self.model.predict(&[urgency, importance, effort])
    }

    /// Overwrites every task's score with the prediction for its current
    /// inputs, in order.
    pub fn refresh_all(&self, tasks: &mut [Task]) {
        for task in tasks.iter_mut() {
            let old = task.priority_score;
            task.rescore(self);
            debug!(
                scorer = self.name(),
                task = %task.name,
                old,
                new = task.priority_score,
                "rescored"
            );
        }
        info!(count = tasks.len(), "task priorities refreshed from predictor");
    }

    /// The task with the highest stored score; see [`highest_priority`].
    pub fn recommend<'a>(&self, tasks: &'a [Task]) -> Result<&'a Task, PrioError> {
        highest_priority(tasks)
    }

    pub fn model(&self) -> &RandomForest {
        &self.model
    }
}

impl Default for ScorePredictor {
    fn default() -> Self {
        Self::new()
    }
}

impl PriorityScorer for ScorePredictor {
    fn name(&self) -> &str {
        "ScorePredictor"
    }

    fn source(&self) -> ScoreSource {
        ScoreSource::Predicted
    }

    fn score(&self, urgency: f64, importance: f64, effort: f64) -> f64 {
        self.predict(urgency, importance, effort)
    }
}

/// Returns the task with the maximum `priority_score`.
///
/// Scores are compared as stored, whichever scorer wrote them. Ties go to
/// the earliest task.
pub fn highest_priority(tasks: &[Task]) -> Result<&Task, PrioError> {
    let mut iter = tasks.iter();
    let first = iter.next().ok_or(PrioError::EmptyRegistry)?;
    Ok(iter.fold(first, |best, t| {
        if t.priority_score > best.priority_score {
            t
        } else {
            best
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f64);

    impl PriorityScorer for Fixed {
        fn name(&self) -> &str {
            "Fixed"
        }
        fn source(&self) -> ScoreSource {
            ScoreSource::Formula
        }
        fn score(&self, _u: f64, _i: f64, _e: f64) -> f64 {
            self.0
        }
    }

    fn task_with_score(name: &str, score: f64) -> Task {
        let mut t = Task::new(name, 1.0, 1.0, 1.0);
        t.rescore(&Fixed(score));
        t
    }

    #[test]
    fn test_highest_priority_picks_max() {
        let tasks = vec![
            task_with_score("a", 5.8),
            task_with_score("b", 9.0),
            task_with_score("c", 3.0),
        ];
        assert_eq!(highest_priority(&tasks).unwrap().name, "b");
    }

    #[test]
    fn test_highest_priority_first_tie_wins() {
        let tasks = vec![
            task_with_score("a", 2.0),
            task_with_score("b", 7.0),
            task_with_score("c", 7.0),
        ];
        assert_eq!(highest_priority(&tasks).unwrap().name, "b");
    }

    #[test]
    fn test_highest_priority_empty() {
        assert_eq!(highest_priority(&[]).unwrap_err(), PrioError::EmptyRegistry);
    }

    #[test]
    fn test_refresh_all_overwrites_every_task() {
        let predictor = ScorePredictor::new();
        let mut tasks = vec![
            Task::new("a", 5.0, 8.0, 3.0),
            Task::new("b", 1.0, 1.0, 1.0),
            Task::new("c", 10.0, 10.0, 10.0),
        ];
        predictor.refresh_all(&mut tasks);

        for t in &tasks {
            assert_eq!(t.score_source, ScoreSource::Predicted);
            let expected = predictor.predict(t.urgency, t.importance, t.effort);
            assert_eq!(t.priority_score.to_bits(), expected.to_bits());
        }
    }

    #[test]
    fn test_refresh_all_empty_is_noop() {
        let predictor = ScorePredictor::new();
        let mut tasks: Vec<Task> = Vec::new();
        predictor.refresh_all(&mut tasks);
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_default_predictor_is_deterministic() {
        let a = ScorePredictor::new();
        let b = ScorePredictor::default();
        assert_eq!(
            a.predict(4.0, 7.0, 6.0).to_bits(),
            b.predict(4.0, 7.0, 6.0).to_bits()
        );
        assert_eq!(a.model().seed(), DEFAULT_SEED);
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let err = ScorePredictor::with_config(ForestConfig::default().with_n_trees(0)).unwrap_err();
        assert!(matches!(err, PrioError::InvalidConfig(_)));
    }

    #[test]
    fn test_scorer_trait() {
        let p = ScorePredictor::new();
        assert_eq!(p.name(), "ScorePredictor");
        assert_eq!(p.source(), ScoreSource::Predicted);
        assert_eq!(p.score(5.0, 5.0, 5.0).to_bits(), p.predict(5.0, 5.0, 5.0).to_bits());
    }

    #[test]
    fn test_recommend_uses_stored_scores() {
        let p = ScorePredictor::new();
        let tasks = vec![task_with_score("low", 1.0), task_with_score("high", 50.0)];
        assert_eq!(p.recommend(&tasks).unwrap().name, "high");
    }
}
