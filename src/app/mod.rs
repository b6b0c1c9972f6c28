//! Application orchestration layer
//!
//! Wires configuration, providers and the terminal UI together without
//! containing catalog logic itself.

/// Run setup and the interactive/headless entry points
pub mod launch;

pub mod loader;
pub mod logging;

pub use launch::{fetch_catalog_blocking, launch_browser, LaunchOptions};
pub use loader::CatalogLoader;
pub use logging::{init_logging, LogTarget};
