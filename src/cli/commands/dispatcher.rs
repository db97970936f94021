//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use clap::CommandFactory;
use tracing::debug;

use crate::cli::args::{Cli, Commands};
use crate::cli::settings::Settings;
use crate::error::{AutoPushError, Result};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Render the help text of `subcommand`, or the top-level help for `None`.
pub fn render_help(subcommand: Option<&str>) -> Result<String> {
    let mut root = Cli::command();
    let help = match subcommand {
        None => root.render_help(),
        Some(name) => root
            .find_subcommand_mut(name)
            .ok_or_else(|| AutoPushError::invalid_input(format!("unknown command '{}'", name)))?
            .render_help(),
    };
    Ok(help.to_string())
}

/// Print help through the UI and succeed.
pub fn show_help(ui: &mut dyn UserInterface, subcommand: Option<&str>) -> Result<CommandResult> {
    ui.message(render_help(subcommand)?.trim_end());
    Ok(CommandResult::success())
}

/// Run a blocking remote call under a spinner.
///
/// The spinner is cleared either way; callers report the outcome.
pub fn with_spinner<T>(
    ui: &mut dyn UserInterface,
    message: &str,
    call: impl FnOnce() -> Result<T>,
) -> Result<T> {
    let mut spinner = ui.start_spinner(message);
    let outcome = call();
    spinner.finish_clear();
    outcome
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    settings: Settings,
}

impl CommandDispatcher {
    /// Create a new dispatcher with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. Without a subcommand the top-level help is shown.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(command) = &cli.command else {
            return show_help(ui, None);
        };
        debug!("Dispatching '{}'", command.name());

        match command {
            Commands::Config(args) => {
                super::config::ConfigCommand::new(self.settings.clone(), args.clone()).execute(ui)
            }
            Commands::Profile(args) => {
                super::profile::ProfileCommand::new(self.settings.clone(), args.clone())
                    .execute(ui)
            }
            Commands::Status(args) => {
                super::status::StatusCommand::new(self.settings.clone(), args.clone()).execute(ui)
            }
            Commands::Checkup => {
                super::checkup::CheckupCommand::new(self.settings.clone()).execute(ui)
            }
            Commands::Completions(args) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
        }
    }
}
