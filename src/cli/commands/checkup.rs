//! Checkup command implementation.
//!
//! The `auto-push checkup` command lists the persisted credentials with
//! masked values and reports which known credentials are usable.

use crate::cli::settings::Settings;
use crate::credentials::mask::preview;
use crate::credentials::KNOWN_CREDENTIALS;
use crate::error::Result;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The checkup command implementation.
pub struct CheckupCommand {
    settings: Settings,
}

impl CheckupCommand {
    /// Create a new checkup command.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl Command for CheckupCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = self.settings.store();
        let entries = store.entries()?;

        if entries.is_empty() {
            ui.message(&format!(
                "No credentials saved in {}",
                store.path().display()
            ));
        } else {
            ui.message(&format!("Credentials in {}:", store.path().display()));
            let mut table = Table::new(&["Name", "Value"]);
            for (name, value) in &entries {
                table.add_row(&[name.as_str(), &preview(value)]);
            }
            ui.message(&table.render());
        }

        let credentials = self.settings.load_credentials()?;
        for name in KNOWN_CREDENTIALS {
            match (credentials.get(name), credentials.source(name)) {
                (Some(value), Some(source)) if !value.is_empty() => {
                    ui.success(&format!("{} is set (from {})", name, source));
                }
                _ => ui.warning(&format!(
                    "{} is not set. Run 'auto-push config' to set it.",
                    name
                )),
            }
        }

        Ok(CommandResult::success())
    }
}
