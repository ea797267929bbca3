//! `passkeep delete` - delete a password.

use std::path::Path;

use clap::Args;

/// Delete command arguments.
#[derive(Args)]
pub struct DeleteArgs {
    /// Service the credential belongs to
    pub service: String,

    /// Username for the service
    pub username: String,
}

/// Run the delete command.
pub fn run(home: &Path, args: DeleteArgs) -> anyhow::Result<()> {
    let mut store = super::open_store(home)?;

    if store.delete(&args.service, &args.username)? {
        println!("Deleted password for {}@{}.", args.username, args.service);
    } else {
        println!("Nothing stored for {}@{}.", args.username, args.service);
    }
    Ok(())
}
