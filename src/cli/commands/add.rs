//! `passvault add` — add or update a password in the vault.

use std::io::{self, IsTerminal, Read};

use crate::cli::output;
use crate::cli::{authenticate, open_store, Cli};
use crate::config::Settings;
use crate::errors::Result;

/// Execute the `add` command.
pub fn execute(cli: &Cli, settings: &Settings, site: &str, password: Option<&str>) -> Result<()> {
    authenticate(settings)?;

    // Determine the password from one of three sources.
    let value = if let Some(v) = password {
        // Source 1: Inline value on the command line.
        output::warning("Password provided on command line — it may appear in shell history.");
        v.to_string()
    } else if !io::stdin().is_terminal() {
        // Source 2: Piped input (stdin is not a terminal).
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf.trim_end().to_string()
    } else {
        // Source 3: Interactive secure prompt (default).
        dialoguer::Password::new()
            .with_prompt(format!("Enter password for {site}"))
            .interact()
            .map_err(|e| {
                crate::errors::PassVaultError::CommandFailed(format!("input prompt: {e}"))
            })?
    };

    // Load the vault, upsert the entry.  `add` saves synchronously.
    let mut store = open_store(cli, settings)?;
    let existed = store.contains_site(site);
    store.add(site, &value)?;

    if existed {
        output::success(&format!(
            "Password updated for {} ({} total)",
            site,
            store.entry_count()
        ));
    } else {
        output::success(&format!(
            "Password added for {} ({} total)",
            site,
            store.entry_count()
        ));
    }

    Ok(())
}
