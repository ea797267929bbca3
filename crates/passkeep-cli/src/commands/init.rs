//! `passkeep init` - set up the access passphrase.

use std::path::Path;

use anyhow::Context;
use clap::Args;
use passkeep_core::paths;
use passkeep_vault::AccessGate;

/// Init command arguments.
#[derive(Args)]
pub struct InitArgs {
    /// Replace an existing access passphrase
    #[arg(long)]
    pub force: bool,
}

/// Run the init command.
pub fn run(home: &Path, args: InitArgs) -> anyhow::Result<()> {
    paths::ensure_dir(home).context("could not create the PassKeep home directory")?;
    let verifier = paths::verifier_file(home);

    if AccessGate::is_initialized(&verifier) {
        if !args.force {
            anyhow::bail!(
                "PassKeep is already initialized (use --force to replace the passphrase)"
            );
        }
        AccessGate::reset(&verifier)?;
    }

    let passphrase = rpassword::prompt_password("New access passphrase: ")
        .context("failed to read passphrase")?;
    if passphrase.is_empty() {
        anyhow::bail!("Passphrase must not be empty");
    }

    let confirm = rpassword::prompt_password("Confirm access passphrase: ")
        .context("failed to read passphrase")?;
    if passphrase != confirm {
        anyhow::bail!("Passphrases do not match");
    }

    AccessGate::initialize(&verifier, &passphrase)?;
    println!("PassKeep initialized at {}.", home.display());
    Ok(())
}
