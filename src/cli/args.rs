//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::remote::{
    Endpoints, DEFAULT_GITHUB_API_URL, DEFAULT_GITHUB_GRAPHQL_URL, DEFAULT_WEATHER_API_URL,
};

use super::settings::Settings;

/// Auto-Push - update your GitHub profile and status from the terminal.
#[derive(Debug, Parser)]
#[command(name = "auto-push")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Credential file to read and append to
    #[arg(
        long,
        global = true,
        env = "AUTO_PUSH_ENV_FILE",
        value_name = "PATH",
        default_value = ".env"
    )]
    pub env_file: PathBuf,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// GitHub REST API base URL
    #[arg(
        long,
        global = true,
        hide = true,
        env = "AUTO_PUSH_GITHUB_API_URL",
        default_value = DEFAULT_GITHUB_API_URL
    )]
    pub github_api_url: String,

    /// GitHub GraphQL endpoint
    #[arg(
        long,
        global = true,
        hide = true,
        env = "AUTO_PUSH_GITHUB_GRAPHQL_URL",
        default_value = DEFAULT_GITHUB_GRAPHQL_URL
    )]
    pub github_graphql_url: String,

    /// Weather API base URL
    #[arg(
        long,
        global = true,
        hide = true,
        env = "AUTO_PUSH_WEATHER_API_URL",
        default_value = DEFAULT_WEATHER_API_URL
    )]
    pub weather_api_url: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Runtime settings derived from the global flags.
    pub fn settings(&self) -> Settings {
        Settings::new(
            self.env_file.clone(),
            Endpoints {
                github_api: self.github_api_url.clone(),
                github_graphql: self.github_graphql_url.clone(),
                weather_api: self.weather_api_url.clone(),
            },
        )
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Save the GitHub token and weather API key
    Config(ConfigArgs),

    /// Update your GitHub profile name and bio
    Profile(ProfileArgs),

    /// Update your GitHub status
    Status(StatusArgs),

    /// Show which credentials are configured
    Checkup,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

impl Commands {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Profile(_) => "profile",
            Self::Status(_) => "status",
            Self::Checkup => "checkup",
            Self::Completions(_) => "completions",
        }
    }
}

/// Arguments for the `config` command.
#[derive(Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// GitHub personal access token
    #[arg(short, long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// OpenWeatherMap API key
    #[arg(short, long, value_name = "KEY")]
    pub weather: Option<String>,
}

impl std::fmt::Debug for ConfigArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("ConfigArgs")
            .field("token", &redact(&self.token))
            .field("weather", &redact(&self.weather))
            .finish()
    }
}

/// Arguments for the `profile` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProfileArgs {
    /// New profile display name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Update the bio (asks where the text comes from)
    #[arg(short, long)]
    pub bio: bool,

    /// Bio source without the menu: weather, commits or custom
    #[arg(short, long, value_name = "SOURCE")]
    pub source: Option<String>,

    /// Location for a weather bio
    #[arg(short, long)]
    pub location: Option<String>,

    /// Text for a custom bio
    #[arg(short, long, value_name = "TEXT")]
    pub custom: Option<String>,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Status message
    #[arg(short, long)]
    pub message: Option<String>,

    /// Status emoji, as a character or a `:shortcode:`
    #[arg(short, long)]
    pub emoji: Option<String>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
