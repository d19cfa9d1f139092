//! Explicit command dispatch for front ends.
//!
//! A front end turns user input into a [`Command`], hands it to
//! [`dispatch`], and renders the returned [`Outcome`]. Nothing here reads
//! or writes a terminal.

mod dispatch;
mod types;

pub use dispatch::dispatch;
pub use types::{Command, MenuChoice, Outcome};
