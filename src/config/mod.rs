//! Configuration module — project-level settings from `.passvault.toml`.

pub mod settings;

pub use settings::Settings;
