use crate::error::{ReleaseError, Result};
use crate::process::CommandRunner;
use std::fmt;
use std::thread::JoinHandle;
use tracing::{debug, info};

/// Work that must finish before the operator is asked to release.
///
/// Each shape resolves through [BeforeRelease::complete], so the orchestrator
/// never inspects the variant itself.
#[derive(Default)]
pub enum BeforeRelease {
    /// No hook configured
    #[default]
    None,
    /// Invoked synchronously; the release proceeds once it returns
    Callback(Box<dyn FnOnce() + Send>),
    /// Already running; the release waits for it and fails on `Err` or panic
    Awaitable(JoinHandle<anyhow::Result<()>>),
    /// Shell command; exit status 0 lets the release proceed
    ShellCommand(String),
}

impl BeforeRelease {
    /// Hook from an optional configured shell command
    pub fn from_command(command: Option<String>) -> Self {
        match command {
            Some(cmd) if !cmd.trim().is_empty() => BeforeRelease::ShellCommand(cmd),
            _ => BeforeRelease::None,
        }
    }

    pub fn callback(f: impl FnOnce() + Send + 'static) -> Self {
        BeforeRelease::Callback(Box::new(f))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, BeforeRelease::None)
    }

    /// Runs or awaits the hook until it has finished.
    ///
    /// A shell command that succeeds has its stdout echoed. One that fails has
    /// its stderr echoed before the error is returned.
    ///
    /// # Returns
    /// * `Ok(())` - the hook finished successfully (or there was none)
    /// * `Err(ReleaseError::Hook)` - the hook failed; callers treat this as fatal
    pub fn complete(self, runner: &dyn CommandRunner) -> Result<()> {
        match self {
            BeforeRelease::None => Ok(()),
            BeforeRelease::Callback(f) => {
                debug!("invoking before_release callback");
                f();
                Ok(())
            }
            BeforeRelease::Awaitable(handle) => {
                debug!("waiting for before_release task");
                match handle.join() {
                    Ok(Ok(())) => Ok(()),
                    Ok(Err(e)) => Err(ReleaseError::hook(e.to_string())),
                    Err(_) => Err(ReleaseError::hook("task panicked")),
                }
            }
            BeforeRelease::ShellCommand(command) => run_shell_hook(&command, runner),
        }
    }
}

fn run_shell_hook(command: &str, runner: &dyn CommandRunner) -> Result<()> {
    info!(command, "running before_release command");
    let output = runner
        .run(command)
        .map_err(|e| ReleaseError::hook(format!("failed to start `{}`: {}", command, e)))?;

    if output.is_success() {
        if !output.stdout.trim().is_empty() {
            println!("{}", output.stdout.trim_end());
        }
        return Ok(());
    }

    eprintln!("{}", output.stderr.trim_end());
    eprintln!();
    Err(ReleaseError::hook(match output.code {
        Some(code) => format!("`{}` exited with code {}", command, code),
        None => format!("`{}` was terminated by a signal", command),
    }))
}

impl fmt::Debug for BeforeRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BeforeRelease::None => f.write_str("None"),
            BeforeRelease::Callback(_) => f.write_str("Callback(..)"),
            BeforeRelease::Awaitable(_) => f.write_str("Awaitable(..)"),
            BeforeRelease::ShellCommand(cmd) => f.debug_tuple("ShellCommand").field(cmd).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{CommandOutput, MockRunner};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_from_command() {
        assert!(BeforeRelease::from_command(None).is_none());
        assert!(BeforeRelease::from_command(Some("   ".to_string())).is_none());
        assert!(matches!(
            BeforeRelease::from_command(Some("npm run build".to_string())),
            BeforeRelease::ShellCommand(ref c) if c == "npm run build"
        ));
    }

    #[test]
    fn test_none_runs_nothing() {
        let runner = MockRunner::new();
        BeforeRelease::None.complete(&runner).unwrap();
        assert!(runner.history().is_empty());
    }

    #[test]
    fn test_callback_is_invoked() {
        let called = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&called);

        BeforeRelease::callback(move || flag.store(true, Ordering::SeqCst))
            .complete(&MockRunner::new())
            .unwrap();

        assert!(called.load(Ordering::SeqCst));
    }

    #[test]
    fn test_awaitable_success() {
        let handle = thread::spawn(|| Ok(()));
        assert!(BeforeRelease::Awaitable(handle)
            .complete(&MockRunner::new())
            .is_ok());
    }

    #[test]
    fn test_awaitable_rejection_is_hook_failure() {
        let handle = thread::spawn(|| Err(anyhow::anyhow!("lint failed")));
        let err = BeforeRelease::Awaitable(handle)
            .complete(&MockRunner::new())
            .unwrap_err();
        assert!(matches!(err, ReleaseError::Hook(ref m) if m == "lint failed"));
    }

    #[test]
    fn test_awaitable_panic_is_hook_failure() {
        let handle = thread::spawn(|| -> anyhow::Result<()> { panic!("boom") });
        let err = BeforeRelease::Awaitable(handle)
            .complete(&MockRunner::new())
            .unwrap_err();
        assert!(matches!(err, ReleaseError::Hook(_)));
    }

    #[test]
    fn test_shell_command_success() {
        let runner = MockRunner::new().respond("npm test", CommandOutput::success("ok\n"));
        BeforeRelease::ShellCommand("npm test".to_string())
            .complete(&runner)
            .unwrap();
        assert_eq!(runner.history(), vec!["npm test"]);
    }

    #[test]
    fn test_shell_command_failure() {
        let runner =
            MockRunner::new().respond("npm test", CommandOutput::failure(1, "1 test failed"));
        let err = BeforeRelease::ShellCommand("npm test".to_string())
            .complete(&runner)
            .unwrap_err();

        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("exited with code 1"));
    }

    #[test]
    fn test_shell_command_that_cannot_start() {
        let runner = MockRunner::new().fail_to_spawn("missing-tool");
        let err = BeforeRelease::ShellCommand("missing-tool".to_string())
            .complete(&runner)
            .unwrap_err();
        assert!(err.to_string().contains("failed to start"));
    }
}
