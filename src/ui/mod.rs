//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for pipes and CI
//! - [`MockUI`] for tests
//! - [`InputResolver`] for flag-or-prompt value resolution
//! - Prompts, spinners, tables and the color theme
//!
//! # Example
//!
//! ```
//! use auto_push::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Auto-Push");
//! ui.success("Profile updated successfully");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod resolver;
pub mod spinner;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_user;
pub use resolver::InputResolver;
pub use spinner::ProgressSpinner;
pub use table::Table;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, AutoPushTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// Workflows only talk to the operator through this trait, so they can be
/// driven by [`MockUI`] in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a prompt and get user input.
    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;

    /// Start a spinner for a blocking operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for a running spinner.
///
/// Spinners never print an outcome line; the caller reports the result
/// once the spinner is cleared.
pub trait SpinnerHandle {
    /// Stop the spinner and erase it.
    fn finish_clear(&mut self);
}

/// A prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for scripted answers).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// The type of prompt.
    pub prompt_type: PromptType,
}

impl Prompt {
    /// A free-form text prompt.
    pub fn input(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Input,
        }
    }

    /// A yes/no prompt.
    pub fn confirm(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Confirm,
        }
    }

    /// A closed menu whose options return their own labels.
    pub fn select(key: &str, question: &str, labels: &[&str]) -> Self {
        let options = labels
            .iter()
            .map(|label| PromptOption {
                label: label.to_string(),
                value: label.to_string(),
            })
            .collect();
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Select { options },
        }
    }
}

/// The type of prompt.
#[derive(Debug, Clone)]
pub enum PromptType {
    /// Yes/no confirmation.
    Confirm,
    /// Free-form text input.
    Input,
    /// Select one from a list of options.
    Select { options: Vec<PromptOption> },
}

/// An option in a select prompt.
#[derive(Debug, Clone)]
pub struct PromptOption {
    /// Display label.
    pub label: String,
    /// Value returned when selected.
    pub value: String,
}

/// Result of a prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptResult {
    /// Boolean result from confirm.
    Bool(bool),
    /// String result from input or select.
    String(String),
}

impl PromptResult {
    /// Get as string.
    pub fn as_string(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::String(s) => s.clone(),
        }
    }

    /// Get as bool if this is a Bool result.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Parse a scripted yes/no answer.
pub(crate) fn parse_bool_answer(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "true" | "yes" | "y" | "1"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_result_as_string() {
        assert_eq!(PromptResult::Bool(true).as_string(), "true");
        assert_eq!(
            PromptResult::String("hello".to_string()).as_string(),
            "hello"
        );
    }

    #[test]
    fn prompt_result_as_bool() {
        assert_eq!(PromptResult::Bool(true).as_bool(), Some(true));
        assert_eq!(PromptResult::String("test".to_string()).as_bool(), None);
    }

    #[test]
    fn select_prompt_uses_labels_as_values() {
        let prompt = Prompt::select("bio_source", "Pick one", &["A", "B"]);
        match prompt.prompt_type {
            PromptType::Select { options } => {
                assert_eq!(options.len(), 2);
                assert_eq!(options[1].label, "B");
                assert_eq!(options[1].value, "B");
            }
            other => panic!("Expected Select variant, got {other:?}"),
        }
    }

    #[test]
    fn input_and_confirm_constructors() {
        let input = Prompt::input("message", "Message?");
        assert!(matches!(input.prompt_type, PromptType::Input));
        assert_eq!(input.question, "Message?");

        let confirm = Prompt::confirm("confirm", "Sure?");
        assert!(matches!(confirm.prompt_type, PromptType::Confirm));
        assert_eq!(confirm.key, "confirm");
    }

    #[test]
    fn parses_bool_answers() {
        assert!(parse_bool_answer("yes"));
        assert!(parse_bool_answer(" Y "));
        assert!(parse_bool_answer("true"));
        assert!(!parse_bool_answer("no"));
        assert!(!parse_bool_answer(""));
    }
}
