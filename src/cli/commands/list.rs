//! `passvault list` — display all stored sites in a table.

use crate::cli::output;
use crate::cli::{authenticate, open_store, Cli};
use crate::config::Settings;
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli, settings: &Settings) -> Result<()> {
    authenticate(settings)?;

    let store = open_store(cli, settings)?;
    let sites = store.list_sites();

    output::info(&format!(
        "{} — {} entry(ies)",
        store.path().display(),
        sites.len()
    ));

    output::print_sites_table(&sites);

    Ok(())
}
