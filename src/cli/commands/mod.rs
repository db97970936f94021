//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations with shared [`Settings`].
//!
//! [`Settings`]: crate::cli::Settings

pub mod checkup;
pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod profile;
pub mod status;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
