//! CLI argument and command definitions.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "helium", version, about = "Helium default agent persona")]
pub struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the default profile (default).
    Profile {
        /// Print the full profile as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List tool flags, or show the status of one tool.
    Tools {
        /// Tool key, e.g. `browser_tool`.
        name: Option<String>,
    },

    /// Resolve the model the default profile runs on.
    Model {
        /// Deployment mode (local, staging, production). Defaults to `ENV_MODE`.
        #[arg(long)]
        mode: Option<String>,
    },

    /// Inspect operator configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration.
    Show,
    /// Print the configuration file location.
    Path,
}
