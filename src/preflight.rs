//! Repository checks that must pass before anything is mutated.

use crate::error::{ReleaseError, Result};
use crate::process::CommandRunner;
use std::fmt;
use std::thread;
use tracing::{debug, warn};

/// Predicate over a check command's captured stdout
pub type StdoutCheck = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// One independent precondition
pub struct PreflightTask {
    /// Command line run through the shell
    pub command: String,
    /// Must return true for the captured stdout
    pub check: StdoutCheck,
    /// Reported to the operator when the task fails
    pub errorlog: String,
}

impl PreflightTask {
    pub fn new(
        command: impl Into<String>,
        check: impl Fn(&str) -> bool + Send + Sync + 'static,
        errorlog: impl Into<String>,
    ) -> Self {
        PreflightTask {
            command: command.into(),
            check: Box::new(check),
            errorlog: errorlog.into(),
        }
    }

    /// Runs the command and applies the predicate.
    ///
    /// A command that cannot be started counts as a failed check.
    fn passes(&self, runner: &dyn CommandRunner) -> bool {
        match runner.run(&self.command) {
            Ok(output) => {
                let passed = output.is_success() && (self.check)(&output.stdout);
                debug!(command = %self.command, code = ?output.code, passed, "preflight task finished");
                passed
            }
            Err(e) => {
                warn!(command = %self.command, error = %e, "preflight command could not start");
                false
            }
        }
    }
}

impl fmt::Debug for PreflightTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreflightTask")
            .field("command", &self.command)
            .field("errorlog", &self.errorlog)
            .finish_non_exhaustive()
    }
}

/// The checks every release needs: a git work tree and at least one remote.
pub fn default_tasks() -> Vec<PreflightTask> {
    vec![
        PreflightTask::new(
            "git status",
            |stdout| !stdout.contains("fatal"),
            "Cannot find a git project!",
        ),
        PreflightTask::new(
            "git remote -v",
            |stdout| !stdout.trim().is_empty(),
            "No remote repository!",
        ),
    ]
}

/// Runs all tasks concurrently and waits for every one of them.
///
/// # Returns
/// * `Ok(())` - every task passed
/// * `Err(ReleaseError::Preflight)` - carrying the errorlog of the first failed
///   task in list order. Callers must treat this as fatal.
pub fn run_preflight(runner: &dyn CommandRunner, tasks: &[PreflightTask]) -> Result<()> {
    let results: Vec<bool> = thread::scope(|scope| {
        let handles: Vec<_> = tasks
            .iter()
            .map(|task| scope.spawn(move || task.passes(runner)))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or(false))
            .collect()
    });

    match tasks
        .iter()
        .zip(results)
        .find(|(_, passed)| !passed)
    {
        Some((task, _)) => Err(ReleaseError::preflight(task.errorlog.clone())),
        None => Ok(()),
    }
}
