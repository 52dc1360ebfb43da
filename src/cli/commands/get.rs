//! `passvault get` — retrieve and print a single password.

use crate::cli::output;
use crate::cli::{authenticate, open_store, Cli};
use crate::config::Settings;
use crate::errors::Result;

/// Execute the `get` command.
///
/// A missing site is an expected outcome, not a failure: it prints an
/// informational message and exits successfully.
pub fn execute(cli: &Cli, settings: &Settings, site: &str) -> Result<()> {
    authenticate(settings)?;

    let store = open_store(cli, settings)?;

    match store.get(site) {
        Some(password) => println!("{password}"),
        None => output::info(&format!("No password stored for '{site}'")),
    }

    Ok(())
}
