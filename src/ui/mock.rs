use crate::error::{ReleaseError, Result};
use crate::ui::Prompter;
use std::collections::VecDeque;

/// A canned answer for [ScriptedPrompter]
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Confirm(bool),
    Select(usize),
    /// `None` accepts the prompt's default
    Input(Option<String>),
}

/// Prompter that replays scripted answers and records every question asked.
///
/// Running out of answers, or meeting an answer of the wrong kind, is an error
/// so a test notices an unexpected prompt.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        ScriptedPrompter {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Messages of every prompt shown so far, in order
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    fn next(&mut self, message: &str) -> Result<Answer> {
        self.asked.push(message.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| unexpected(message, "no scripted answer left"))
    }
}

fn unexpected(message: &str, reason: &str) -> ReleaseError {
    ReleaseError::Io(std::io::Error::new(
        std::io::ErrorKind::UnexpectedEof,
        format!("prompt '{}': {}", message, reason),
    ))
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        match self.next(message)? {
            Answer::Confirm(answer) => Ok(answer),
            other => Err(unexpected(message, &format!("expected confirm, got {:?}", other))),
        }
    }

    fn select(&mut self, message: &str, choices: &[String]) -> Result<usize> {
        match self.next(message)? {
            Answer::Select(index) if index < choices.len() => Ok(index),
            other => Err(unexpected(message, &format!("invalid selection {:?}", other))),
        }
    }

    fn input(&mut self, message: &str, default: &str) -> Result<String> {
        match self.next(message)? {
            Answer::Input(Some(text)) => Ok(text),
            Answer::Input(None) => Ok(default.to_string()),
            other => Err(unexpected(message, &format!("expected input, got {:?}", other))),
        }
    }
}
