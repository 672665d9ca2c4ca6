//! Command runner trait and the process-spawning implementation.
//!
//! The [`CommandRunner`] trait is the seam between deciding *what* to build
//! and actually running encoders. [`ProcessRunner`] spawns real processes (or
//! only prints them in dry-run mode); tests substitute a recording mock.
//!
//! Runners never fail the batch: every problem is reported through
//! [`RunOutcome`] and a `tracing` warning, and the caller moves on.

use super::command::BuildCommand;
use crate::output;
use std::process::Command;
use tracing::{debug, warn};

/// Execution switches shared by the runner and the orchestrator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunMode {
    /// Print commands instead of executing them.
    pub dry_run: bool,
    /// Print extra skip/build diagnostics and each command before it runs.
    pub verbose: bool,
}

/// What happened to one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Ran and exited successfully.
    Succeeded,
    /// Only printed (dry-run mode).
    DryRun,
    /// The process could not be launched.
    FailedToStart(String),
    /// The process ran but exited unsuccessfully. `None` when killed by a signal.
    Failed(Option<i32>),
}

/// Executes or simulates a single external command.
pub trait CommandRunner {
    fn run(&self, command: &BuildCommand) -> RunOutcome;
}

/// Runs commands as child processes, blocking until each exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner {
    mode: RunMode,
}

impl ProcessRunner {
    pub fn new(mode: RunMode) -> Self {
        Self { mode }
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &BuildCommand) -> RunOutcome {
        if self.mode.dry_run {
            println!("{}", output::format_dry_run(command));
            return RunOutcome::DryRun;
        }

        if self.mode.verbose {
            println!("{command}");
        }

        debug!(program = %command.program, output = %command.output.display(), "spawning encoder");
        match Command::new(&command.program).args(&command.args).status() {
            Err(err) => {
                warn!(command = %command, error = %err, "failed to start command");
                RunOutcome::FailedToStart(err.to_string())
            }
            Ok(status) if !status.success() => {
                warn!(command = %command, %status, "command returned error");
                RunOutcome::Failed(status.code())
            }
            Ok(_) => RunOutcome::Succeeded,
        }
    }
}
