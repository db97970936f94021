//! Command-line interface for Auto-Push.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`settings`] - Runtime settings derived from global flags
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;
pub mod settings;

pub use args::{Cli, Commands, CompletionsArgs, ConfigArgs, ProfileArgs, StatusArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
pub use settings::Settings;
