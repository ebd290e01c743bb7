//! tccview — A showcase-quality TUI for browsing ITCC tracking records
//!
//! This is the binary entry point. It parses CLI arguments and dispatches
//! to either the TUI or CLI commands, mapping errors to exit codes.

use clap::Parser;
use std::process::ExitCode;
use tccview::cli::{self, Cli, Commands, Exit};
use tccview::config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => Exit::Ok.into(),
        Err(err) => {
            eprintln!("error: {:#}", err);
            cli::exit_code_for_error(&err).into()
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Load configuration with proper precedence
    let config = Config::load(&cli)?;

    // Initialize logging (to file, not stderr — the TUI owns the screen)
    let _guard = tccview::logging::init(&config.logging)?;

    match cli.command {
        Some(Commands::List { json, basin, page }) => cli::list::run(&config, json, basin, page),
        Some(Commands::Show {
            track_id,
            json,
            page,
        }) => cli::show::run(&config, &track_id, json, page),
        Some(Commands::Export { dataset, output }) => cli::export::run(dataset, &output),
        None => {
            // Default: launch TUI
            tccview::tui::run(config, cli.track).await
        }
    }
}
