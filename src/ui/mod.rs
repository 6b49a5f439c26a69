//! User interface module - prompts, progress and formatting.
//!
//! Separates concerns:
//! - `formatter` - labelled output lines
//! - `progress` - the spinner shown while release commands run
//! - `mock` - scripted prompter for tests
//! - This module - the [Prompter] trait and its terminal implementation

use dialoguer::{Confirm, Input, Select};

use crate::error::Result;

pub mod formatter;
pub mod mock;
pub mod progress;

pub use formatter::{
    display_error, display_info, display_planned_commands, display_success, display_warning,
};
pub use mock::ScriptedPrompter;
pub use progress::ReleaseProgress;

/// Asks the operator questions. Every call blocks until answered.
pub trait Prompter {
    /// Yes/no question
    fn confirm(&mut self, message: &str) -> Result<bool>;

    /// Single choice; returns the index into `choices`
    fn select(&mut self, message: &str, choices: &[String]) -> Result<usize>;

    /// Free text with a default used when the operator just presses Enter
    fn input(&mut self, message: &str, default: &str) -> Result<String>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        (**self).confirm(message)
    }

    fn select(&mut self, message: &str, choices: &[String]) -> Result<usize> {
        (**self).select(message, choices)
    }

    fn input(&mut self, message: &str, default: &str) -> Result<String> {
        (**self).input(message, default)
    }
}

/// Terminal prompts rendered with `dialoguer`.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        Ok(Confirm::new().with_prompt(message).default(true).interact()?)
    }

    fn select(&mut self, message: &str, choices: &[String]) -> Result<usize> {
        Ok(Select::new()
            .with_prompt(message)
            .items(choices)
            .default(0)
            .interact()?)
    }

    fn input(&mut self, message: &str, default: &str) -> Result<String> {
        Ok(Input::<String>::new()
            .with_prompt(message)
            .default(default.to_string())
            .validate_with(|tag: &String| validate_release_tag(tag))
            .interact_text()?)
    }
}

/// Characters that would break out of the quoted `--message` argument
const FORBIDDEN_TAG_CHARS: &[char] = &['"', '`', '$', '\\'];

/// Validates an operator-supplied release tag.
///
/// The tag is interpolated into a double-quoted shell argument, so quoting and
/// expansion characters are rejected.
///
/// # Examples
///
/// ```ignore
/// validate_release_tag("v1.5.0")      // Ok
/// validate_release_tag("next")        // Ok
/// validate_release_tag("")            // Err - empty
/// validate_release_tag("v1\"; rm")    // Err - quote
/// ```
pub fn validate_release_tag(tag: &str) -> std::result::Result<(), String> {
    if tag.trim().is_empty() {
        return Err("Release tag cannot be empty".to_string());
    }

    if let Some(c) = tag.chars().find(|c| FORBIDDEN_TAG_CHARS.contains(c)) {
        return Err(format!("Release tag cannot contain '{}'", c));
    }

    Ok(())
}
