//! Non-interactive UI for pipes, scripts and CI.

use std::collections::HashMap;

use crate::error::{AutoPushError, Result};

use super::theme::AutoPushTheme;
use super::{
    parse_bool_answer, OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface,
};

/// Prefix of environment variables that answer prompts by key.
pub const PROMPT_ENV_PREFIX: &str = "AUTO_PUSH_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts cannot be shown, so each one is answered from an
/// `AUTO_PUSH_PROMPT_<KEY>` variable. A prompt without one is an input
/// error rather than a hang on closed stdin.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
    theme: AutoPushTheme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self::with_overrides(mode, env_overrides)
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
            theme: AutoPushTheme::plain(),
        }
    }

    fn scripted_answer(&self, prompt: &Prompt) -> Option<String> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        self.env_overrides.get(&env_key).cloned()
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let answer = self.scripted_answer(prompt).ok_or_else(|| {
            AutoPushError::invalid_input(format!(
                "cannot prompt for '{}' in non-interactive mode; pass it as a flag or set {}{}",
                prompt.key,
                PROMPT_ENV_PREFIX,
                prompt.key.to_uppercase()
            ))
        })?;

        Ok(match prompt.prompt_type {
            PromptType::Confirm => PromptResult::Bool(parse_bool_answer(&answer)),
            _ => PromptResult::String(answer),
        })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(LineSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_banner() {
            println!("\n{}\n", title);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner stand-in; the start line was already printed and there is
/// nothing to erase.
struct LineSpinner;

impl SpinnerHandle for LineSpinner {
    fn finish_clear(&mut self) {}
}
