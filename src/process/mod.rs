//! External command execution
//!
//! Every git and package-manager call goes through the [CommandRunner] trait
//! so the release flow can be driven by a scripted runner in tests.
//!
//! - [shell::ShellRunner]: runs commands through the platform shell
//! - [mock::MockRunner]: records commands and replays canned results

pub mod mock;
pub mod shell;

pub use mock::MockRunner;
pub use shell::ShellRunner;

use crate::error::Result;

/// Exit status and captured output of a finished command
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// A successful run with the given stdout
    pub fn success(stdout: impl Into<String>) -> Self {
        CommandOutput {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A failed run with the given exit code and stderr
    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        CommandOutput {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs a shell command line to completion.
///
/// ## Thread Safety
///
/// Implementors must be `Send + Sync`: preflight checks share one runner
/// across scoped threads.
///
/// ## Errors
///
/// `Err` means the command could not be started at all. A command that ran
/// and exited non-zero is reported through [CommandOutput::code].
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &str) -> Result<CommandOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, command: &str) -> Result<CommandOutput> {
        (**self).run(command)
    }
}
