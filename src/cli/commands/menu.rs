//! `passvault menu` — the interactive session loop.
//!
//! Reproduces the classic flow: master password, cipher selection,
//! then an add/get/list/exit menu over one open vault.  The cipher
//! choice is only prompted for when `--cipher` was not given.

use dialoguer::{Input, Password, Select};

use crate::cli::output;
use crate::cli::{authenticate, build_cipher, vault_path, Cli};
use crate::config::Settings;
use crate::crypto::CipherKind;
use crate::errors::{PassVaultError, Result};
use crate::vault::VaultStore;

/// Convert a dialoguer prompt failure into our error type.
fn prompt_err(e: dialoguer::Error) -> PassVaultError {
    PassVaultError::CommandFailed(format!("prompt: {e}"))
}

/// Execute the `menu` command.
pub fn execute(cli: &Cli, settings: &Settings) -> Result<()> {
    authenticate(settings)?;

    // Pick the session cipher.  It stays bound to the vault until the
    // program exits; there is no switching mid-session.
    let kind = match cli.cipher {
        Some(kind) => kind,
        None => {
            let choices = ["Stream XOR", "Shift cipher"];
            let selected = Select::new()
                .with_prompt("Choose encryption algorithm")
                .items(&choices)
                .default(0)
                .interact()
                .map_err(prompt_err)?;
            if selected == 0 {
                CipherKind::Xor
            } else {
                CipherKind::Shift
            }
        }
    };
    let cipher = build_cipher(kind, cli, settings)?;

    let path = vault_path(cli, settings)?;
    let mut store = VaultStore::open(&path, cipher)?;
    output::info(&format!(
        "Vault unlocked with {} cipher — {} entry(ies)",
        cipher.name(),
        store.entry_count()
    ));

    loop {
        let actions = ["Add a password", "Get a password", "List sites", "Exit"];
        let action = Select::new()
            .with_prompt("Choose an action")
            .items(&actions)
            .default(0)
            .interact()
            .map_err(prompt_err)?;

        match action {
            0 => {
                let site: String = Input::new()
                    .with_prompt("Website/account")
                    .allow_empty(true)
                    .interact_text()
                    .map_err(prompt_err)?;
                let password = Password::new()
                    .with_prompt(format!("Password for {site}"))
                    .interact()
                    .map_err(prompt_err)?;

                store.add(&site, &password)?;
                output::success(&format!("Password added for {site}"));
            }
            1 => {
                let site: String = Input::new()
                    .with_prompt("Website/account to retrieve")
                    .allow_empty(true)
                    .interact_text()
                    .map_err(prompt_err)?;

                match store.get(&site) {
                    Some(password) => println!("{password}"),
                    None => output::info(&format!("No password stored for '{site}'")),
                }
            }
            2 => output::print_sites_table(&store.list_sites()),
            _ => break,
        }
    }

    Ok(())
}
