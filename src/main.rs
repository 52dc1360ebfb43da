use clap::Parser;
use passvault::cli::{Cli, Commands};
use passvault::config::Settings;
use passvault::errors::Result;

fn main() {
    let cli = Cli::parse();

    // Settings come from .passvault.toml in the working directory,
    // falling back to built-in defaults when there is no file.
    let settings = match load_settings() {
        Ok(s) => s,
        Err(e) => {
            passvault::cli::output::error(&e.to_string());
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Add {
            ref site,
            ref password,
        } => passvault::cli::commands::add::execute(&cli, &settings, site, password.as_deref()),
        Commands::Get { ref site } => {
            passvault::cli::commands::get::execute(&cli, &settings, site)
        }
        Commands::List => passvault::cli::commands::list::execute(&cli, &settings),
        Commands::Menu => passvault::cli::commands::menu::execute(&cli, &settings),
    };

    if let Err(e) = result {
        passvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn load_settings() -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    Settings::load(&cwd)
}
