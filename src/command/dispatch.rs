//! Command handler.

use tracing::debug;

use super::types::{Command, Outcome};
use crate::error::PrioError;
use crate::prioritizer::TaskPrioritizer;

/// Runs one command against the prioritizer.
///
/// Only [`Command::Recommend`] can fail, with [`PrioError::EmptyRegistry`].
pub fn dispatch(app: &mut TaskPrioritizer, command: Command) -> Result<Outcome, PrioError> {
    debug!(?command, "dispatch");
    let outcome = match command {
        Command::Add {
            name,
            urgency,
            importance,
            effort,
        } => Outcome::Added(app.add_task(name, urgency, importance, effort).clone()),
        Command::List => Outcome::Listed(app.list_tasks().to_vec()),
        Command::Update { name, update } => {
            let found = app.update_task(&name, update);
            Outcome::Updated { name, found }
        }
        Command::Refresh => {
            app.refresh_priorities_via_predictor();
            Outcome::Refreshed {
                count: app.list_tasks().len(),
            }
        }
        Command::Recommend => Outcome::Recommended(app.recommend_task()?.clone()),
        Command::Exit => Outcome::Exit,
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TaskUpdate;

    fn add(name: &str, u: f64, i: f64, e: f64) -> Command {
        Command::Add {
            name: name.into(),
            urgency: u,
            importance: i,
            effort: e,
        }
    }

    #[test]
    fn test_add_then_list() {
        let mut app = TaskPrioritizer::default();
        let added = dispatch(&mut app, add("A", 5.0, 8.0, 3.0)).unwrap();
        assert!(matches!(added, Outcome::Added(ref t) if (t.priority_score - 5.8).abs() < 1e-9));

        match dispatch(&mut app, Command::List).unwrap() {
            Outcome::Listed(tasks) => assert_eq!(tasks.len(), 1),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn test_update_not_found() {
        let mut app = TaskPrioritizer::default();
        let out = dispatch(
            &mut app,
            Command::Update {
                name: "ghost".into(),
                update: TaskUpdate::all(1.0, 1.0, 1.0),
            },
        )
        .unwrap();
        assert_eq!(
            out,
            Outcome::Updated {
                name: "ghost".into(),
                found: false
            }
        );
    }

    #[test]
    fn test_refresh_reports_count() {
        let mut app = TaskPrioritizer::default();
        dispatch(&mut app, add("a", 1.0, 2.0, 3.0)).unwrap();
        dispatch(&mut app, add("b", 4.0, 5.0, 6.0)).unwrap();
        assert_eq!(
            dispatch(&mut app, Command::Refresh).unwrap(),
            Outcome::Refreshed { count: 2 }
        );
    }

    #[test]
    fn test_recommend_empty_is_error() {
        let mut app = TaskPrioritizer::default();
        assert_eq!(
            dispatch(&mut app, Command::Recommend).unwrap_err(),
            PrioError::EmptyRegistry
        );
    }

    #[test]
    fn test_exit() {
        let mut app = TaskPrioritizer::default();
        assert_eq!(dispatch(&mut app, Command::Exit).unwrap(), Outcome::Exit);
    }
}
