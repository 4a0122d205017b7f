//! Load simulation: build query tool commands, run and time them.
//!
//! - [`command`]: turns a config, target genome, and range into a [`QueryCommand`](command::QueryCommand)
//! - [`runner`]: the [`CommandRunner`](runner::CommandRunner) seam plus process and dry-run implementations
//! - [`engine`]: per-trial and whole-run drivers

pub mod command;
pub mod engine;
pub mod runner;
