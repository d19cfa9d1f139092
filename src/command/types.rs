//! Command, menu, and outcome types.

use std::fmt;

use crate::registry::{Task, TaskUpdate};

/// Entries of the interactive menu, keyed `"1"`..`"6"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddTask,
    DisplayTasks,
    UpdateTask,
    RefreshPriorities,
    Recommend,
    Exit,
}

impl MenuChoice {
    /// All entries in menu order.
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::AddTask,
        MenuChoice::DisplayTasks,
        MenuChoice::UpdateTask,
        MenuChoice::RefreshPriorities,
        MenuChoice::Recommend,
        MenuChoice::Exit,
    ];

    /// Parses a menu key, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::AddTask),
            "2" => Some(MenuChoice::DisplayTasks),
            "3" => Some(MenuChoice::UpdateTask),
            "4" => Some(MenuChoice::RefreshPriorities),
            "5" => Some(MenuChoice::Recommend),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn key(self) -> char {
        match self {
            MenuChoice::AddTask => '1',
            MenuChoice::DisplayTasks => '2',
            MenuChoice::UpdateTask => '3',
            MenuChoice::RefreshPriorities => '4',
            MenuChoice::Recommend => '5',
            MenuChoice::Exit => '6',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddTask => "Add Task",
            MenuChoice::DisplayTasks => "Display Tasks",
            MenuChoice::UpdateTask => "Update Task",
            MenuChoice::RefreshPriorities => "Update Priorities with AI",
            MenuChoice::Recommend => "Get AI Recommendation",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// A fully-formed request against the prioritizer.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add {
        name: String,
        urgency: f64,
        importance: f64,
        effort: f64,
    },
    List,
    Update {
        name: String,
        update: TaskUpdate,
    },
    Refresh,
    Recommend,
    Exit,
}

/// Result of dispatching a [`Command`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Added(Task),
    Listed(Vec<Task>),
    Updated { name: String, found: bool },
    Refreshed { count: usize },
    Recommended(Task),
    Exit,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Added(task) => write!(f, "Task '{}' added.", task.name),
            Outcome::Listed(tasks) if tasks.is_empty() => f.write_str("No tasks available."),
            Outcome::Listed(tasks) => {
                for (i, task) in tasks.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{task}")?;
                }
                Ok(())
            }
            Outcome::Updated { name, found: true } => write!(f, "Task '{name}' updated."),
            Outcome::Updated { name, found: false } => write!(f, "Task '{name}' not found."),
            Outcome::Refreshed { .. } => {
                f.write_str("Task priorities updated based on AI predictions.")
            }
            Outcome::Recommended(task) => write!(
                f,
                "AI recommends focusing on: {} with priority {:.2}",
                task.name, task.priority_score
            ),
            Outcome::Exit => f.write_str("Exiting the system."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_parse_round_trip_keys() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::parse(&choice.key().to_string()), Some(choice));
        }
    }

    #[test]
    fn test_menu_parse_rejects_unknown() {
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("add"), None);
        assert_eq!(MenuChoice::parse(" 2\n"), Some(MenuChoice::DisplayTasks));
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::Listed(vec![]).to_string(), "No tasks available.");
        assert_eq!(
            Outcome::Updated {
                name: "x".into(),
                found: false
            }
            .to_string(),
            "Task 'x' not found."
        );
        assert_eq!(
            Outcome::Recommended(Task::new("Email", 9.0, 10.0, 2.0)).to_string(),
            "AI recommends focusing on: Email with priority 8.00"
        );
        assert_eq!(Outcome::Exit.to_string(), "Exiting the system.");
    }

    #[test]
    fn test_listed_one_task_per_line() {
        let out = Outcome::Listed(vec![
            Task::new("a", 1.0, 1.0, 1.0),
            Task::new("b", 2.0, 2.0, 2.0),
        ])
        .to_string();
        assert_eq!(out.lines().count(), 2);
        assert!(out.starts_with("Task(name=a,"));
    }
}
