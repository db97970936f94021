//! Profile command implementation.
//!
//! The `auto-push profile` command updates the profile name and bio. The
//! bio can come from the current weather, the total commit count or text
//! supplied by the user.

use std::fmt;
use std::str::FromStr;

use crate::cli::args::ProfileArgs;
use crate::cli::settings::Settings;
use crate::credentials::{Credentials, GITHUB_TOKEN, WEATHER_API_KEY};
use crate::error::{AutoPushError, Result};
use crate::remote::{GitHubClient, ProfileUpdate, WeatherClient};
use crate::ui::{InputResolver, UserInterface};

use super::dispatcher::{show_help, with_spinner, Command, CommandResult};

/// Where the bio text comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BioSource {
    /// Current weather for a location.
    Weather,
    /// Total commit count across repositories.
    Commits,
    /// Text typed or passed by the user.
    Custom,
}

impl BioSource {
    /// Every source, in menu order.
    pub const ALL: [BioSource; 3] = [Self::Weather, Self::Commits, Self::Custom];

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weather => "Weather info",
            Self::Commits => "Total commits",
            Self::Custom => "Custom bio",
        }
    }

    /// Short name accepted by `--source`.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Weather => "weather",
            Self::Commits => "commits",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for BioSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BioSource {
    type Err = AutoPushError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|source| {
                let s = s.trim();
                source.label().eq_ignore_ascii_case(s) || source.keyword().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| AutoPushError::invalid_input(format!("unknown bio source '{}'", s)))
    }
}

/// The profile command implementation.
pub struct ProfileCommand {
    settings: Settings,
    args: ProfileArgs,
}

impl ProfileCommand {
    /// Create a new profile command.
    pub fn new(settings: Settings, args: ProfileArgs) -> Self {
        Self { settings, args }
    }

    fn wants_bio(&self) -> bool {
        self.args.bio || self.args.source.is_some()
    }

    fn compose_bio(
        &self,
        ui: &mut dyn UserInterface,
        credentials: &Credentials,
        github: &GitHubClient,
    ) -> Result<String> {
        let labels: Vec<&str> = BioSource::ALL.iter().map(|s| s.label()).collect();
        let choice = InputResolver::new(ui).resolve_choice(
            self.args.source.as_deref(),
            "bio_source",
            "Select bio source",
            &labels,
        )?;

        match choice.parse::<BioSource>()? {
            BioSource::Weather => {
                let location = InputResolver::new(ui).resolve(
                    self.args.location.as_deref(),
                    "location",
                    "Enter your location:",
                )?;
                if location.trim().is_empty() {
                    return Err(AutoPushError::invalid_input("location cannot be empty"));
                }

                let key = credentials.require(WEATHER_API_KEY)?;
                let weather = WeatherClient::new(&self.settings.endpoints.weather_api, key)?;
                with_spinner(ui, "Fetching weather...", || {
                    weather.fetch_summary(location.trim())
                })
            }
            BioSource::Commits => {
                let tally = with_spinner(ui, "Counting commits...", || {
                    github.count_total_commits()
                })?;
                if !tally.skipped.is_empty() {
                    ui.warning(&format!(
                        "Skipped {} repositories whose commits could not be listed",
                        tally.skipped.len()
                    ));
                }
                if ui.output_mode().shows_details() {
                    ui.message(&format!(
                        "Counted {} commits across {} repositories",
                        tally.total, tally.repositories
                    ));
                }
                Ok(format!("Total commits: {}", tally.total))
            }
            BioSource::Custom => InputResolver::new(ui).resolve(
                self.args.custom.as_deref(),
                "custom",
                "Enter your custom bio:",
            ),
        }
    }
}

impl Command for ProfileCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.name.is_none() && !self.wants_bio() {
            return show_help(ui, Some("profile"));
        }

        let credentials = self.settings.load_credentials()?;
        let token = credentials.require(GITHUB_TOKEN)?;
        let github = GitHubClient::new(&self.settings.endpoints, token)?;

        let bio = if self.wants_bio() {
            Some(self.compose_bio(ui, &credentials, &github)?)
        } else {
            None
        };

        let update = ProfileUpdate::new(self.args.name.clone(), bio);
        with_spinner(ui, "Updating profile...", || github.update_profile(&update))?;

        if let Some(bio) = &update.bio {
            ui.message(&format!("Bio: {}", bio));
        }
        ui.success("Profile updated successfully");
        Ok(CommandResult::success())
    }
}
