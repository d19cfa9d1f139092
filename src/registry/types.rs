//! Task and partial-update types.

use std::fmt;

use crate::scoring::{PriorityScorer, ScoreSource, WeightedFormula};

/// A registered task.
///
/// `priority_score` holds whatever the last scorer wrote; see
/// [`score_source`](Task::score_source).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Task {
    pub name: String,
    pub urgency: f64,
    pub importance: f64,
    pub effort: f64,
    pub priority_score: f64,
    pub score_source: ScoreSource,
}

impl Task {
    /// Creates a task scored by the weighted formula.
    pub fn new(name: impl Into<String>, urgency: f64, importance: f64, effort: f64) -> Self {
        let mut task = Self {
            name: name.into(),
            urgency,
            importance,
            effort,
            priority_score: 0.0,
            score_source: ScoreSource::Formula,
        };
        task.rescore(&WeightedFormula);
        task
    }

    /// Applies the provided fields, then rescores with the weighted formula.
    ///
    /// The rescore happens even when `update` is empty.
    pub fn apply(&mut self, update: &TaskUpdate) {
        if let Some(u) = update.urgency {
            self.urgency = u;
        }
        if let Some(i) = update.importance {
            self.importance = i;
        }
        if let Some(e) = update.effort {
            self.effort = e;
        }
        self.rescore(&WeightedFormula);
    }

    /// Overwrites the score and its provenance using `scorer` on the
    /// current inputs.
    pub fn rescore<S: PriorityScorer + ?Sized>(&mut self, scorer: &S) {
        self.priority_score = scorer.score(self.urgency, self.importance, self.effort);
        self.score_source = scorer.source();
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task(name={}, urgency={}, importance={}, effort={}, priority={:.2})",
            self.name, self.urgency, self.importance, self.effort, self.priority_score
        )
    }
}

/// Any subset of a task's inputs. `None` leaves the field unchanged.
///
/// # Examples
///
/// ```
/// use u_taskprio::registry::TaskUpdate;
///
/// let update = TaskUpdate::default().with_effort(9.0);
/// assert!(update.urgency.is_none());
/// assert_eq!(update.effort, Some(9.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskUpdate {
    pub urgency: Option<f64>,
    pub importance: Option<f64>,
    pub effort: Option<f64>,
}

impl TaskUpdate {
    /// Update that sets all three fields.
    pub fn all(urgency: f64, importance: f64, effort: f64) -> Self {
        Self {
            urgency: Some(urgency),
            importance: Some(importance),
            effort: Some(effort),
        }
    }

    pub fn with_urgency(mut self, urgency: f64) -> Self {
        self.urgency = Some(urgency);
        self
    }

    pub fn with_importance(mut self, importance: f64) -> Self {
        self.importance = Some(importance);
        self
    }

    pub fn with_effort(mut self, effort: f64) -> Self {
        self.effort = Some(effort);
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.urgency.is_none() && self.importance.is_none() && self.effort.is_none()
    }
}
