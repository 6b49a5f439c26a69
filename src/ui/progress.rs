use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while release commands run.
///
/// Status lines are printed above the spinner so they stay in the scrollback.
pub struct ReleaseProgress {
    bar: ProgressBar,
}

impl ReleaseProgress {
    /// Start a spinner on stderr with `message` as its initial text
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        ReleaseProgress { bar }
    }

    /// A spinner that draws nothing
    pub fn hidden() -> Self {
        ReleaseProgress {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn info(&self, message: &str) {
        self.bar.println(format!("{} {}", style("ℹ").blue(), message));
        self.bar.set_message(message.to_string());
    }

    pub fn succeed(&self, message: &str) {
        self.bar.println(format!("{} {}", style("✔").green(), message));
    }

    pub fn fail(&self, message: &str) {
        self.bar.println(format!("{} {}", style("✖").red(), message));
    }

    /// Run `f` with the spinner line cleared, so its output does not tear it
    pub fn suspend<F: FnOnce() -> T, T>(&self, f: F) -> T {
        self.bar.suspend(f)
    }

    /// Stop the spinner and clear its line
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for ReleaseProgress {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
