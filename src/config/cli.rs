use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "user-registry")]
#[command(about = "In-memory user registration with email and password checks")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the built-in registration walkthrough
    Demo,

    /// Register every user listed in a TOML file, then print the history
    Load {
        /// Path to TOML configuration file
        #[arg(short, long, default_value = "registry.toml")]
        config: PathBuf,

        /// Print the resulting history as JSON
        #[arg(long)]
        json: bool,

        /// Fail on the first rejected user instead of reporting each outcome
        #[arg(long)]
        strict: bool,
    },
}
