//! helium — default agent persona tooling
//!
//! Inspect the Helium persona and resolve the model it runs on.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; warnings are always shown
    let filter = if cli.verbose {
        "warn,helium_core=debug,helium_cli=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config_store = helium_core::ConfigStore::new();

    match cli.command {
        None => commands::profile::run(false)?,
        Some(Commands::Profile { json }) => commands::profile::run(json)?,
        Some(Commands::Tools { ref name }) => commands::tools::run(name.as_deref())?,
        Some(Commands::Model { ref mode }) => {
            tracing::debug!(path = %config_store.path().display(), "Using config");
            commands::model::run(mode.as_deref(), &config_store)?;
        }
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::show(&config_store)?,
            ConfigAction::Path => println!("{}", config_store.path().display()),
        },
    }

    Ok(())
}
