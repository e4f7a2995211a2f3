//! fo-bootstrap CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use fo_bootstrap::cli::{Cli, CommandDispatcher, Commands};
use fo_bootstrap::error::EXIT_INTERRUPTED;
use fo_bootstrap::BootstrapError;
use fo_bootstrap::shell::{install_interrupt_handler, interrupted, is_ci};
use fo_bootstrap::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so `check --json` output stays parseable.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("fo_bootstrap=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fo_bootstrap=info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if let Err(e) = install_interrupt_handler() {
        tracing::warn!("Failed to set Ctrl-C handler: {}", e);
    }

    tracing::debug!("fo-bootstrap starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
        console::set_colors_enabled(false);
    }

    let root = match cli.root.clone() {
        Some(root) => root,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("✗ Cannot determine the current directory: {}", e);
                return ExitCode::from(1);
            }
        },
    };

    let is_interactive = match &cli.command {
        Some(Commands::Start(args)) => !args.non_interactive && !is_ci(),
        _ => !is_ci(),
    } && console::user_attended();

    let mut ui = create_ui(is_interactive, output_mode);
    let dispatcher = CommandDispatcher::new(root);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code),
        Err(BootstrapError::Interrupted) => {
            if !interrupted() {
                ui.warning("Cancelled by user");
            }
            ExitCode::from(EXIT_INTERRUPTED)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            ui.error(&format!("Error: {}", e));
            if let Some(hint) = e.hint() {
                ui.show_hint(&hint);
            }
            ExitCode::from(e.exit_code())
        }
    }
}
