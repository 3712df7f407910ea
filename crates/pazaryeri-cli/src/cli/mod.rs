//! # CLI Layer
//!
//! One possible UI client for the storefront state library. This is the
//! **only** place that:
//! - Parses arguments
//! - Configures logging output
//! - Writes to stdout/stderr
//! - Knows how the platform's dark mode is detected
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: clap definitions in `setup.rs`
//! 2. **Logging**: `tracing-subscriber` on stderr, `RUST_LOG` or `--verbose`
//! 3. **Context Setup**: `pazaryeri::init::initialize` opens the stores
//! 4. **Dispatch**: call the matching `StorefrontApi` method
//! 5. **Output**: `render.rs` turns a `CmdResult` into text or JSON

mod render;
mod setup;

use anyhow::Result;
use clap::Parser;
use pazaryeri::commands::CmdResult;
use pazaryeri::init::initialize;
use render::{print_json, print_paths, print_result};
use setup::{Cli, Commands, FavCommands, ThemeCommands};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const SYSTEM_THEME_ENV: &str = "PAZARYERI_SYSTEM_THEME";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = initialize(cli.data.clone())?;
    debug!(command = ?cli.command, data_dir = %ctx.paths.data_dir.display(), "Dispatching");

    let result = match cli.command {
        Commands::Fav(cmd) => {
            let api = &mut ctx.api;
            match cmd {
                FavCommands::Add { ids } => api.add_favorites(ids.as_slice())?,
                FavCommands::Remove { ids } => api.remove_favorites(ids.as_slice())?,
                FavCommands::Toggle { ids } => api.toggle_favorites(ids.as_slice())?,
                FavCommands::Check { ids } => api.check_favorites(ids.as_slice())?,
                FavCommands::List => api.list_favorites()?,
                FavCommands::Count => api.count_favorites()?,
                FavCommands::Clear => api.clear_favorites()?,
            }
        }
        Commands::Theme(cmd) => {
            let dark = system_prefers_dark();
            match cmd {
                ThemeCommands::Show => ctx.api.show_theme(dark)?,
                ThemeCommands::Set { mode } => ctx.api.set_theme(mode.into(), dark)?,
                ThemeCommands::Toggle => ctx.api.toggle_theme(dark)?,
            }
        }
        Commands::Paths => {
            print_paths(&ctx.paths);
            return Ok(());
        }
    };

    output(&result, cli.json)
}

fn output(result: &CmdResult, json: bool) -> Result<()> {
    if json {
        print_json(result)?;
    } else {
        print_result(result);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// `PAZARYERI_SYSTEM_THEME=dark|light` skips platform detection.
fn system_prefers_dark() -> bool {
    match std::env::var(SYSTEM_THEME_ENV).ok().as_deref() {
        Some("dark") => true,
        Some("light") => false,
        _ => matches!(dark_light::detect(), dark_light::Mode::Dark),
    }
}
