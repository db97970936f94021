//! Status command implementation.
//!
//! The `auto-push status` command sets the GitHub status message and emoji
//! after an explicit confirmation.

use crate::cli::args::StatusArgs;
use crate::cli::settings::Settings;
use crate::credentials::GITHUB_TOKEN;
use crate::error::Result;
use crate::remote::{GitHubClient, StatusUpdate};
use crate::ui::{InputResolver, UserInterface};

use super::dispatcher::{with_spinner, Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    settings: Settings,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(settings: Settings, args: StatusArgs) -> Self {
        Self { settings, args }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let credentials = self.settings.load_credentials()?;
        let token = credentials.require(GITHUB_TOKEN)?;

        let mut resolver = InputResolver::new(ui);
        let message = resolver.resolve(
            self.args.message.as_deref(),
            "message",
            "Enter your status message:",
        )?;
        let emoji = resolver.resolve(
            self.args.emoji.as_deref(),
            "emoji",
            "Enter your status emoji:",
        )?;
        let update = StatusUpdate::new(&message, &emoji)?;

        if !self.args.yes
            && !resolver.confirm("confirm", "Do you want to update your GitHub status?")?
        {
            ui.message("Operation cancelled");
            return Ok(CommandResult::success());
        }

        let github = GitHubClient::new(&self.settings.endpoints, token)?;
        let status = with_spinner(ui, "Updating status...", || github.update_status(&update))?;

        ui.success("Status updated successfully");
        ui.message(&format!(
            "{} {}",
            status.emoji.as_deref().unwrap_or(&update.emoji),
            status.message.as_deref().unwrap_or(&update.message)
        ));
        Ok(CommandResult::success())
    }
}
