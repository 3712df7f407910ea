use clap::{Parser, Subcommand, ValueEnum};
use pazaryeri::model::ThemeMode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pazaryeri",
    bin_name = "pazaryeri",
    version,
    about = "Manage Pazaryeri storefront favorites and theme preference",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding persisted state (overrides config and PAZARYERI_DATA)
    #[arg(long, global = true, value_name = "DIR")]
    pub data: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose logging (debug level unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Favorite products
    #[command(subcommand, alias = "favorites")]
    Fav(FavCommands),

    /// Theme preference
    #[command(subcommand)]
    Theme(ThemeCommands),

    /// Show where state and configuration live
    Paths,
}

#[derive(Subcommand, Debug)]
pub enum FavCommands {
    /// Mark products as favorites
    Add {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Unmark products
    #[command(alias = "rm")]
    Remove {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Flip favorite state of products
    Toggle {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Report whether products are favorites
    Check {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// List favorite product ids
    #[command(alias = "ls")]
    List,

    /// Print the number of favorites
    Count,

    /// Remove all favorites
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum ThemeCommands {
    /// Show the stored preference and the resulting appearance
    Show,

    /// Store a preference
    Set {
        #[arg(value_enum)]
        mode: ModeArg,
    },

    /// Switch between dark and light
    Toggle,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ModeArg {
    Light,
    Dark,
    System,
}

impl From<ModeArg> for ThemeMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Light => ThemeMode::Light,
            ModeArg::Dark => ThemeMode::Dark,
            ModeArg::System => ThemeMode::System,
        }
    }
}
