use crate::error::{ReleaseError, Result};
use crate::process::{CommandOutput, CommandRunner};
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock runner for testing without spawning processes.
///
/// Commands without a scripted response succeed with empty output.
pub struct MockRunner {
    responses: HashMap<String, CommandOutput>,
    unspawnable: Vec<String>,
    history: Mutex<Vec<String>>,
}

impl MockRunner {
    /// Create a runner where every command succeeds
    pub fn new() -> Self {
        MockRunner {
            responses: HashMap::new(),
            unspawnable: Vec::new(),
            history: Mutex::new(Vec::new()),
        }
    }

    /// Script the result returned for an exact command line
    pub fn respond(mut self, command: impl Into<String>, output: CommandOutput) -> Self {
        self.responses.insert(command.into(), output);
        self
    }

    /// Make a command fail to start, as if the binary were missing
    pub fn fail_to_spawn(mut self, command: impl Into<String>) -> Self {
        self.unspawnable.push(command.into());
        self
    }

    /// Runner whose `git status` and `git remote -v` both pass
    pub fn with_healthy_repo() -> Self {
        MockRunner::new()
            .respond("git status", CommandOutput::success("On branch main\n"))
            .respond(
                "git remote -v",
                CommandOutput::success("origin\tgit@example.com:pkg.git (fetch)\n"),
            )
    }

    /// Every command run so far, in call order
    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .map(|h| h.clone())
            .unwrap_or_default()
    }

    /// Whether `command` has been run at least once
    pub fn ran(&self, command: &str) -> bool {
        self.history().iter().any(|c| c == command)
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, command: &str) -> Result<CommandOutput> {
        if let Ok(mut history) = self.history.lock() {
            history.push(command.to_string());
        }

        if self.unspawnable.iter().any(|c| c == command) {
            return Err(ReleaseError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("command not found: {}", command),
            )));
        }

        Ok(self
            .responses
            .get(command)
            .cloned()
            .unwrap_or_else(|| CommandOutput::success("")))
    }
}
