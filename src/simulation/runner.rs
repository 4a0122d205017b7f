//! Execution of query tool commands.

use std::process::{Command, Stdio};
use std::time::Instant;

use thiserror::Error;
use tracing::debug;

use crate::simulation::command::QueryCommand;

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command '{command}' exited with {}: {stderr}", exit_description(.code))]
    NonZeroExit {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Runs one command to completion
pub trait CommandRunner {
    /// Execute `command` synchronously, blocking until it exits.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError` if the command cannot be started or exits
    /// with a non-zero status.
    fn execute(&mut self, command: &QueryCommand) -> Result<(), ExecutionError>;
}

/// Spawns the query tool as a child process and waits for it.
///
/// The child's stdout is captured and dropped; stderr is kept for error reports.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn execute(&mut self, command: &QueryCommand) -> Result<(), ExecutionError> {
        let output = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ExecutionError::Spawn {
                program: command.program.display().to_string(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            return Err(ExecutionError::NonZeroExit {
                command: command.to_string(),
                code: output.status.code(),
                stderr,
            });
        }
        if !stderr.is_empty() {
            debug!("stderr from '{}': {}", command, stderr);
        }
        Ok(())
    }
}

/// Prints each command line to stderr instead of executing it
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn execute(&mut self, command: &QueryCommand) -> Result<(), ExecutionError> {
        eprintln!("{command}");
        Ok(())
    }
}

/// Keeps every command it is given and always succeeds
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingRunner {
    pub commands: Vec<QueryCommand>,
}

#[cfg(test)]
impl CommandRunner for RecordingRunner {
    fn execute(&mut self, command: &QueryCommand) -> Result<(), ExecutionError> {
        self.commands.push(command.clone());
        Ok(())
    }
}

/// Run `command` and return the wall-clock time it took, in fractional seconds.
///
/// # Errors
///
/// Propagates the runner's `ExecutionError`.
pub fn time_invocation<R: CommandRunner + ?Sized>(
    runner: &mut R,
    command: &QueryCommand,
) -> Result<f64, ExecutionError> {
    let start = Instant::now();
    runner.execute(command)?;
    let elapsed = start.elapsed().as_secs_f64();
    debug!("{:.6}s: {}", elapsed, command);
    Ok(elapsed)
}
