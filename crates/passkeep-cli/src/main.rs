//! PassKeep CLI entry point.

use clap::Parser;
use passkeep_cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = match cli.verbose {
        0 => "passkeep_vault=info,passkeep_cli=info",
        1 => "passkeep_vault=debug,passkeep_cli=debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    run(cli)
}
