//! Facade exposing the front-end operations.

use crate::error::PrioError;
use crate::registry::{Task, TaskRegistry, TaskUpdate};
use crate::scoring::ScorePredictor;

/// Registry plus predictor, wired together by the host.
///
/// # Examples
///
/// ```
/// use u_taskprio::prioritizer::TaskPrioritizer;
/// use u_taskprio::registry::TaskRegistry;
/// use u_taskprio::scoring::ScorePredictor;
///
/// let mut app = TaskPrioritizer::new(TaskRegistry::new(), ScorePredictor::new());
/// app.add_task("Write report", 5.0, 8.0, 3.0);
/// app.add_task("Email", 9.0, 10.0, 2.0);
/// assert_eq!(app.recommend_task().unwrap().name, "Email");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskPrioritizer {
    registry: TaskRegistry,
    predictor: ScorePredictor,
}

impl TaskPrioritizer {
    pub fn new(registry: TaskRegistry, predictor: ScorePredictor) -> Self {
        Self {
            registry,
            predictor,
        }
    }

    pub fn add_task(
        &mut self,
        name: impl Into<String>,
        urgency: f64,
        importance: f64,
        effort: f64,
    ) -> &Task {
        self.registry.add(name, urgency, importance, effort)
    }

    pub fn list_tasks(&self) -> &[Task] {
        self.registry.list()
    }

    /// Returns whether a task named `name` was found.
    pub fn update_task(&mut self, name: &str, update: TaskUpdate) -> bool {
        self.registry.find_and_update(name, update)
    }

    pub fn refresh_priorities_via_predictor(&mut self) {
        self.predictor.refresh_all(self.registry.tasks_mut());
    }

    /// Highest-scoring task, or [`PrioError::EmptyRegistry`].
    pub fn recommend_task(&self) -> Result<&Task, PrioError> {
        self.predictor.recommend(self.registry.list())
    }

    pub fn registry(&self) -> &TaskRegistry {
        &self.registry
    }

    pub fn predictor(&self) -> &ScorePredictor {
        &self.predictor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoreSource;

    #[test]
    fn test_refresh_then_recommend_sees_predicted_scores() {
        let mut app = TaskPrioritizer::default();
        app.add_task("a", 3.0, 4.0, 8.0);
        app.add_task("b", 9.0, 10.0, 2.0);
        app.refresh_priorities_via_predictor();

        assert!(app
            .list_tasks()
            .iter()
            .all(|t| t.score_source == ScoreSource::Predicted));
        assert_eq!(app.recommend_task().unwrap().name, "b");
    }

    #[test]
    fn test_update_after_refresh_mixes_sources() {
        let mut app = TaskPrioritizer::default();
        app.add_task("a", 5.0, 8.0, 3.0);
        app.add_task("b", 1.0, 1.0, 1.0);
        app.refresh_priorities_via_predictor();
        assert!(app.update_task("b", TaskUpdate::default().with_urgency(2.0)));

        let tasks = app.list_tasks();
        assert_eq!(tasks[0].score_source, ScoreSource::Predicted);
        assert_eq!(tasks[1].score_source, ScoreSource::Formula);
        assert!((tasks[1].priority_score - 1.4).abs() < 1e-9);
    }

    #[test]
    fn test_recommend_empty() {
        let app = TaskPrioritizer::default();
        assert_eq!(app.recommend_task().unwrap_err(), PrioError::EmptyRegistry);
    }

    #[test]
    fn test_accessors() {
        let mut app = TaskPrioritizer::default();
        app.add_task("a", 1.0, 1.0, 1.0);
        assert_eq!(app.registry().len(), 1);
        assert_eq!(app.predictor().model().n_trees(), 100);
    }
}
