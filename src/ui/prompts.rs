//! Interactive prompts backed by dialoguer.

use console::Term;
use dialoguer::{Confirm, Input, Select};

use crate::error::{AutoPushError, Result};

use super::{Prompt, PromptOption, PromptResult, PromptType};

fn map_dialoguer_err(e: dialoguer::Error) -> AutoPushError {
    AutoPushError::Io(e.into())
}

/// Prompt the user for input on `term`.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    match &prompt.prompt_type {
        PromptType::Confirm => prompt_confirm(prompt, term),
        PromptType::Input => prompt_input(prompt, term),
        PromptType::Select { options } => prompt_select(prompt, options, term),
    }
}

fn prompt_confirm(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let result = Confirm::new()
        .with_prompt(&prompt.question)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;
    Ok(PromptResult::Bool(result))
}

fn prompt_input(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    // Empty answers are returned as-is; callers decide whether they are valid.
    let result: String = Input::<String>::new()
        .with_prompt(&prompt.question)
        .allow_empty(true)
        .interact_text_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(PromptResult::String(result))
}

fn prompt_select(prompt: &Prompt, options: &[PromptOption], term: &Term) -> Result<PromptResult> {
    if options.is_empty() {
        return Err(AutoPushError::invalid_input(format!(
            "no options to choose from for '{}'",
            prompt.key
        )));
    }
    let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();

    let selection = Select::new()
        .with_prompt(&prompt.question)
        .items(&labels)
        .default(0)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    let chosen = options
        .get(selection)
        .ok_or_else(|| AutoPushError::invalid_input("selection out of range"))?;
    Ok(PromptResult::String(chosen.value.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_without_options_is_rejected() {
        let prompt = Prompt::select("bio_source", "Pick", &[]);
        let err = prompt_user(&prompt, &Term::stdout()).unwrap_err();
        assert!(matches!(err, AutoPushError::InvalidInput { .. }));
    }

    #[test]
    fn dialoguer_errors_map_to_io() {
        let err = map_dialoguer_err(dialoguer::Error::IO(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "closed",
        )));
        assert!(matches!(err, AutoPushError::Io(_)));
    }
}
