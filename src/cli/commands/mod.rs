//! Implementations of the individual subcommands.

pub mod add;
pub mod get;
pub mod list;
pub mod menu;
