//! Config command implementation.
//!
//! The `auto-push config` command saves credentials to the credential file.

use crate::cli::args::ConfigArgs;
use crate::cli::settings::Settings;
use crate::credentials::{Credentials, GITHUB_TOKEN, WEATHER_API_KEY};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{show_help, Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    settings: Settings,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(settings: Settings, args: ConfigArgs) -> Self {
        Self { settings, args }
    }

    /// Credentials to persist, in the order they are written.
    ///
    /// An empty flag counts as not given; writing it would shadow the
    /// stored value.
    fn provided(&self) -> Vec<(&'static str, &str)> {
        [
            (GITHUB_TOKEN, self.args.token.as_deref()),
            (WEATHER_API_KEY, self.args.weather.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.filter(|v| !v.is_empty()).map(|v| (name, v)))
        .collect()
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let provided = self.provided();
        if provided.is_empty() {
            return show_help(ui, Some("config"));
        }

        let store = self.settings.store();
        let mut credentials = Credentials::default();
        for (name, value) in provided {
            store.set_credential(&mut credentials, name, value)?;
            ui.success(&format!("{} set successfully", name));
        }

        ui.success("Configuration set successfully");
        Ok(CommandResult::success())
    }
}
