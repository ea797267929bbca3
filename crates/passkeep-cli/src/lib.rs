//! PassKeep command-line interface.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// PassKeep - encrypted password manager
#[derive(Parser)]
#[command(name = "passkeep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Directory holding the key, data, and verifier files
    #[arg(long, env = "PASSKEEP_HOME")]
    pub home: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Set up the access passphrase
    Init(commands::init::InitArgs),

    /// Store or update a password
    Add(commands::add::AddArgs),

    /// Retrieve a password
    Get(commands::get::GetArgs),

    /// Delete a password
    Delete(commands::delete::DeleteArgs),

    /// List stored services and usernames
    List,

    /// Show version information
    Version,
}

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let home = commands::resolve_home(cli.home)?;

    match cli.command {
        Commands::Init(args) => commands::init::run(&home, args),
        Commands::Add(args) => commands::add::run(&home, args),
        Commands::Get(args) => commands::get::run(&home, args),
        Commands::Delete(args) => commands::delete::run(&home, args),
        Commands::List => commands::list::run(&home),
        Commands::Version => {
            println!("passkeep {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
