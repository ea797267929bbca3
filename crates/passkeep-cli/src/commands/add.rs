//! `passkeep add` - store or update a password.

use std::path::Path;

use anyhow::Context;
use clap::Args;

/// Add command arguments.
#[derive(Args)]
pub struct AddArgs {
    /// Service the credential belongs to
    pub service: String,

    /// Username for the service
    pub username: String,

    /// Password value (if omitted, prompts for hidden input)
    #[arg(long)]
    pub secret: Option<String>,
}

/// Run the add command.
pub fn run(home: &Path, args: AddArgs) -> anyhow::Result<()> {
    let mut store = super::open_store(home)?;

    let secret = match args.secret {
        Some(value) => value,
        None => {
            let prompt = format!("Password for {}@{}: ", args.username, args.service);
            rpassword::prompt_password(prompt).context("failed to read password")?
        }
    };

    store.add(&args.service, &args.username, &secret)?;
    println!("Stored password for {}@{}.", args.username, args.service);
    Ok(())
}
