//! Auto-Push CLI entry point.

use std::process::ExitCode;

use auto_push::cli::{Cli, CommandDispatcher, Commands};
use auto_push::ui::{create_ui, OutputMode};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("auto_push=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("auto_push=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!(
        "Auto-Push starting (command: {})",
        cli.command.as_ref().map(Commands::name).unwrap_or("none")
    );

    let output_mode = OutputMode::from_flags(cli.quiet, cli.verbose);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(true, output_mode);

    // Completion scripts are piped into files, so they get no banner.
    if !matches!(cli.command, Some(Commands::Completions(_))) {
        ui.show_header("Auto-Push");
    }

    let dispatcher = CommandDispatcher::new(cli.settings());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
