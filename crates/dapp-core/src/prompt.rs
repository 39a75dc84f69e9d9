//! Interactive input collaborator
//!
//! Every prompt either yields a value or reports that the user cancelled.
//! Cancellation is an ordinary return value, not an error, so option
//! resolution can stop cleanly at any step.

use anyhow::Result;

/// Answer to a single prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt<T> {
    Value(T),
    Cancelled,
}

/// One entry of a selection list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub hint: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            hint: hint.into(),
        }
    }
}

/// Inline validation for text input; `Err` carries the message to show
pub type Validator = fn(&str) -> Result<(), String>;

/// Source of interactive answers and sink for inline warnings
pub trait Prompter {
    /// Free text input, re-asked until `validate` passes. An empty answer
    /// takes `default`.
    fn text(&mut self, message: &str, default: &str, validate: Validator)
        -> Result<Prompt<String>>;

    /// Pick one of `choices`; returns the chosen index
    fn select(&mut self, message: &str, choices: &[Choice], initial: usize)
        -> Result<Prompt<usize>>;

    fn confirm(&mut self, message: &str, initial: bool) -> Result<Prompt<bool>>;

    /// Inline warning shown between prompts
    fn warn(&mut self, message: &str) -> Result<()>;
}
