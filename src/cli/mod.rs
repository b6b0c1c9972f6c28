//! CLI command handlers for StyleDeck.
//!
//! Headless, scriptable access to the catalog for automation and testing.

pub mod catalog;
pub mod common;
pub mod config;

pub use catalog::{CategoriesArgs, ShowArgs, StylesArgs};
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
