//! `passkeep list` - list stored services and usernames.

use std::path::Path;

/// Run the list command.
///
/// The store guarantees no ordering, so the listing sorts by service then
/// username before printing. Secrets are never shown here; use `get`.
pub fn run(home: &Path) -> anyhow::Result<()> {
    let store = super::open_store(home)?;

    let mut entries = store.list();
    if entries.is_empty() {
        println!("No passwords stored.");
        return Ok(());
    }

    entries.sort_by(|a, b| {
        a.service
            .cmp(&b.service)
            .then_with(|| a.username.cmp(&b.username))
    });

    println!("{:<24} {}", "SERVICE", "USERNAME");
    println!("{}", "-".repeat(48));
    for entry in &entries {
        println!("{:<24} {}", entry.service, entry.username);
    }
    println!("\n{} credential(s) total.", entries.len());

    Ok(())
}
