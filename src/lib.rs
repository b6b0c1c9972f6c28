//! StyleDeck Library
//!
//! Fetches a device's catalog of style presets from a bridge service (or a
//! mock) and provides the query and browsing state used by the terminal UI
//! and the headless CLI.

// Module declarations
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod format;
pub mod models;
pub mod provider;
pub mod shortcuts;
pub mod tui;
