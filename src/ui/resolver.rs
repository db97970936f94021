//! Flag-or-prompt value resolution.
//!
//! Workflows accept most values either as a command-line flag or, when the
//! flag is absent, interactively. [`InputResolver`] is the single place that
//! makes that decision.

use tracing::debug;

use crate::error::{AutoPushError, Result};

use super::{Prompt, PromptResult, UserInterface};

/// Resolves workflow inputs from flags, falling back to prompts.
pub struct InputResolver<'a> {
    ui: &'a mut dyn UserInterface,
}

impl<'a> InputResolver<'a> {
    /// Create a resolver that prompts through `ui`.
    pub fn new(ui: &'a mut dyn UserInterface) -> Self {
        Self { ui }
    }

    /// Return `flag` when it is non-empty, otherwise ask `question`.
    ///
    /// The entered text is returned exactly as typed, including an empty
    /// answer. Callers that need a value check for emptiness themselves.
    pub fn resolve(&mut self, flag: Option<&str>, key: &str, question: &str) -> Result<String> {
        if let Some(value) = non_empty(flag) {
            debug!("Using flag value for '{}'", key);
            return Ok(value.to_string());
        }

        let answer = self.ui.prompt(&Prompt::input(key, question))?;
        Ok(answer.as_string())
    }

    /// Return `flag` when it is non-empty, otherwise present a menu of
    /// `options` and return the chosen label.
    pub fn resolve_choice(
        &mut self,
        flag: Option<&str>,
        key: &str,
        question: &str,
        options: &[&str],
    ) -> Result<String> {
        if let Some(value) = non_empty(flag) {
            debug!("Using flag value for '{}'", key);
            return Ok(value.to_string());
        }

        let answer = self.ui.prompt(&Prompt::select(key, question, options))?;
        Ok(answer.as_string())
    }

    /// Ask a yes/no question.
    pub fn confirm(&mut self, key: &str, question: &str) -> Result<bool> {
        match self.ui.prompt(&Prompt::confirm(key, question))? {
            PromptResult::Bool(answer) => Ok(answer),
            PromptResult::String(other) => Err(AutoPushError::invalid_input(format!(
                "expected a yes/no answer for '{}', got '{}'",
                key, other
            ))),
        }
    }
}

fn non_empty(flag: Option<&str>) -> Option<&str> {
    flag.filter(|value| !value.is_empty())
}
