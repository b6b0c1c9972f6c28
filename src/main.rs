//! StyleDeck - Terminal browser for device style catalogs
//!
//! Without a subcommand the interactive browser starts; subcommands give
//! headless, scriptable access to the same catalog.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use styledeck::app::{self, LaunchOptions, LogTarget};
use styledeck::catalog::CatalogIndex;
use styledeck::cli::{CategoriesArgs, CliResult, ConfigArgs, ShowArgs, StylesArgs};
use styledeck::config::Config;
use styledeck::provider::CredentialOverrides;

/// StyleDeck - Terminal browser for device style catalogs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Use the built-in mock catalog instead of the bridge
    #[arg(long, global = true)]
    mock: bool,

    /// Simulated mock latency in milliseconds
    #[arg(long, value_name = "MS", global = true)]
    mock_delay_ms: Option<u64>,

    /// Fall back to local development credentials
    #[arg(long, global = true)]
    dev_credentials: bool,

    /// Bridge base URL
    #[arg(long, value_name = "URL", global = true)]
    base_url: Option<String>,

    /// Bridge auth token
    #[arg(long, value_name = "TOKEN", global = true)]
    auth_token: Option<String>,

    /// Device code
    #[arg(long, value_name = "CODE", global = true)]
    device_code: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

impl GlobalArgs {
    fn launch_options(&self) -> LaunchOptions {
        LaunchOptions {
            force_mock: self.mock,
            mock_delay_ms: self.mock_delay_ms,
            overrides: CredentialOverrides {
                base_url: self.base_url.clone(),
                auth_token: self.auth_token.clone(),
                device_code: self.device_code.clone(),
            },
            dev_credentials: self.dev_credentials,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List categories
    Categories(CategoriesArgs),
    /// List styles of a category
    Styles(StylesArgs),
    /// Show details of a style
    Show(ShowArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {e:#}");
        Config::default()
    });
    let options = cli.global.launch_options();
    options.apply(&mut config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    match cli.command {
        None => {
            let log_file = config.logging.log_file_path()?;
            app::init_logging(
                &config.logging.level,
                cli.global.verbose,
                LogTarget::File(log_file),
            )?;
            app::launch_browser(config, &options, &runtime)
        }
        Some(command) => {
            app::init_logging(&config.logging.level, cli.global.verbose, LogTarget::Stderr)?;
            if let Err(err) = run_command(command, &config, &options, &runtime) {
                eprintln!("Error: {err}");
                std::process::exit(err.exit_code());
            }
            Ok(())
        }
    }
}

fn run_command(
    command: Command,
    config: &Config,
    options: &LaunchOptions,
    runtime: &tokio::runtime::Runtime,
) -> CliResult<()> {
    let fetch_index = || -> CliResult<CatalogIndex> {
        let catalog = app::fetch_catalog_blocking(runtime, config, options)?;
        debug!(categories = catalog.uistyle.len(), "Catalog fetched");
        Ok(CatalogIndex::new(std::sync::Arc::new(catalog)))
    };

    match command {
        Command::Categories(args) => args.execute(&fetch_index()?),
        Command::Styles(args) => args.execute(&fetch_index()?),
        Command::Show(args) => args.execute(&fetch_index()?),
        Command::Config(args) => args.execute(),
    }
}
