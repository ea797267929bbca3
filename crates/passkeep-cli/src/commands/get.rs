//! `passkeep get` - retrieve a password.

use std::path::Path;

use clap::Args;

/// Get command arguments.
#[derive(Args)]
pub struct GetArgs {
    /// Service the credential belongs to
    pub service: String,

    /// Username for the service
    pub username: String,
}

/// Run the get command.
pub fn run(home: &Path, args: GetArgs) -> anyhow::Result<()> {
    let store = super::open_store(home)?;

    match store.get(&args.service, &args.username) {
        Some(secret) => {
            println!("{}", secret.expose());
            Ok(())
        }
        None => anyhow::bail!(
            "No password stored for {}@{}",
            args.username,
            args.service
        ),
    }
}
