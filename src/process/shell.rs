use crate::error::Result;
use crate::process::{CommandOutput, CommandRunner};
use std::path::PathBuf;
use std::process::Command;
use std::time::Instant;
use tracing::{debug, instrument};

/// Runs command lines through `sh -c` (or `cmd /C` on Windows).
///
/// Output is captured rather than inherited so it does not tear the spinner.
#[derive(Debug, Clone, Default)]
pub struct ShellRunner {
    working_dir: Option<PathBuf>,
}

impl ShellRunner {
    /// Runner that executes in the current working directory
    pub fn new() -> Self {
        ShellRunner::default()
    }

    /// Runner that executes every command inside `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        ShellRunner {
            working_dir: Some(dir.into()),
        }
    }

    fn shell_command(command: &str) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", command]);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.args(["-c", command]);
            cmd
        }
    }
}

impl CommandRunner for ShellRunner {
    #[instrument(skip(self))]
    fn run(&self, command: &str) -> Result<CommandOutput> {
        let start = Instant::now();
        let mut cmd = Self::shell_command(command);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output()?;
        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        debug!(
            code = ?result.code,
            duration_ms = start.elapsed().as_millis(),
            "command finished"
        );
        Ok(result)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_captures_stdout() {
        let out = ShellRunner::new().run("echo hello").unwrap();
        assert!(out.is_success());
        assert_eq!(out.stdout.trim(), "hello");
    }

    #[test]
    fn test_reports_exit_code_and_stderr() {
        let out = ShellRunner::new().run("echo boom >&2; exit 3").unwrap();
        assert_eq!(out.code, Some(3));
        assert_eq!(out.stderr.trim(), "boom");
    }

    #[test]
    fn test_runs_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "x").unwrap();

        let out = ShellRunner::in_dir(dir.path()).run("ls").unwrap();
        assert!(out.stdout.contains("marker.txt"));
    }
}
