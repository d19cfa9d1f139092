//! Interactive console front end.
//!
//! Environment:
//!
//! - `RUST_LOG`: log filter (default `warn`), logs go to stderr
//! - `TASKPRIO_SEED`: predictor seed (default 42)
//! - `TASKPRIO_TREES`: predictor tree count (default 100)

use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tracing::warn;
use tracing_subscriber::EnvFilter;
use u_taskprio::command::{dispatch, Command, MenuChoice, Outcome};
use u_taskprio::forest::ForestConfig;
use u_taskprio::prioritizer::TaskPrioritizer;
use u_taskprio::registry::{TaskRegistry, TaskUpdate};
use u_taskprio::scoring::{ScorePredictor, DEFAULT_SEED};
use u_taskprio::PrioError;

fn env_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok().filter(|s| !s.is_empty())?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}

fn forest_config_from_env() -> ForestConfig {
    let mut config =
        ForestConfig::default().with_seed(env_parsed("TASKPRIO_SEED").unwrap_or(DEFAULT_SEED));
    if let Some(n) = env_parsed::<usize>("TASKPRIO_TREES") {
        config = config.with_n_trees(n);
    }
    config
}

/// Parses a number, rejecting `nan` and infinities.
fn parse_finite(line: &str) -> Option<f64> {
    line.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Line-oriented prompt over any reader/writer pair.
struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Prints `prompt` and returns the next line without its line ending,
    /// or `None` at end of input. Other whitespace is kept.
    fn ask_raw(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Like [`ask_raw`](Self::ask_raw), trimmed on both sides.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        Ok(self.ask_raw(prompt)?.map(|line| line.trim().to_string()))
    }

    /// Re-prompts until the line parses as a number.
    fn ask_number(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            match parse_finite(&line) {
                Some(v) => return Ok(Some(v)),
                None => writeln!(self.output, "Please enter a number.")?,
            }
        }
    }

    /// Like [`ask_number`](Self::ask_number), but a blank line means "keep".
    fn ask_optional_number(&mut self, prompt: &str) -> io::Result<Option<Option<f64>>> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            if line.is_empty() {
                return Ok(Some(None));
            }
            match parse_finite(&line) {
                Some(v) => return Ok(Some(Some(v))),
                None => writeln!(self.output, "Please enter a number or leave blank.")?,
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nTask Prioritization System - AI Interaction")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.key(), choice.label())?;
        }
        Ok(())
    }

    /// Collects the fields a menu choice needs. `None` at end of input.
    fn read_command(&mut self, choice: MenuChoice) -> io::Result<Option<Command>> {
        let command = match choice {
            MenuChoice::AddTask => {
                let Some(name) = self.ask_raw("Enter task name: ")? else {
                    return Ok(None);
                };
                let Some(urgency) = self.ask_number("Enter urgency (1-10): ")? else {
                    return Ok(None);
                };
                let Some(importance) = self.ask_number("Enter importance (1-10): ")? else {
                    return Ok(None);
                };
                let Some(effort) = self.ask_number("Enter effort (1-10): ")? else {
                    return Ok(None);
                };
                Command::Add {
                    name,
                    urgency,
                    importance,
                    effort,
                }
            }
            MenuChoice::DisplayTasks => Command::List,
            MenuChoice::UpdateTask => {
                let Some(name) = self.ask_raw("Enter the task name to update: ")? else {
                    return Ok(None);
                };
                let Some(urgency) =
                    self.ask_optional_number("Enter new urgency (1-10, blank to keep): ")?
                else {
                    return Ok(None);
                };
                let Some(importance) =
                    self.ask_optional_number("Enter new importance (1-10, blank to keep): ")?
                else {
                    return Ok(None);
                };
                let Some(effort) =
                    self.ask_optional_number("Enter new effort (1-10, blank to keep): ")?
                else {
                    return Ok(None);
                };
                Command::Update {
                    name,
                    update: TaskUpdate {
                        urgency,
                        importance,
                        effort,
                    },
                }
            }
            MenuChoice::RefreshPriorities => Command::Refresh,
            MenuChoice::Recommend => Command::Recommend,
            MenuChoice::Exit => Command::Exit,
        };
        Ok(Some(command))
    }

    fn run(&mut self, app: &mut TaskPrioritizer) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.ask("Choose an option: ")? else {
                return Ok(());
            };
            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                continue;
            };
            let Some(command) = self.read_command(choice)? else {
                return Ok(());
            };

            match dispatch(app, command) {
                // Adds are silent in the menu.
                Ok(Outcome::Added(_)) => {}
                Ok(Outcome::Exit) => {
                    writeln!(self.output, "{}", Outcome::Exit)?;
                    return Ok(());
                }
                Ok(outcome) => writeln!(self.output, "{outcome}")?,
                Err(PrioError::EmptyRegistry) => {
                    writeln!(self.output, "No tasks available to recommend.")?
                }
                Err(e) => writeln!(self.output, "Error: {e}")?,
            }
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let predictor = match ScorePredictor::with_config(forest_config_from_env()) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("failed to build predictor: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut app = TaskPrioritizer::new(TaskRegistry::new(), predictor);

    let stdin = io::stdin();
    let mut console = Console {
        input: stdin.lock(),
        output: io::stdout(),
    };
    match console.run(&mut app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("console error: {e}");
            ExitCode::FAILURE
        }
    }
}
