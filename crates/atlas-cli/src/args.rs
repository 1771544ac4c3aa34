use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for atlas-cli
#[derive(Debug, Parser)]
#[command(
    name = "atlas",
    version,
    about = "CLI for querying the atlas-core country directory and its HDI data"
)]
pub struct CliArgs {
    /// Catalog source: a local .json / .json.gz file or an http(s) URL
    /// (default: the REST countries endpoint)
    #[arg(short = 'c', long = "catalog", global = true)]
    pub catalog: Option<String>,

    /// Path to the HDI CSV (default: "HDR23-24_Statistical_Annex_HDI_Table - HDI.csv")
    #[arg(long = "hdi", global = true)]
    pub hdi: Option<PathBuf>,

    /// Path to the favorites JSON file (default: favorites.json)
    #[arg(long = "favorites", global = true)]
    pub favorites: Option<PathBuf>,

    /// More log output on stderr (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a directory query
    Query {
        /// Parameters as key=value pairs or a query string (e.g. "q=fra&page=2")
        params: Vec<String>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the normalized catalog as JSON
    Countries,

    /// List the region and timezone facets
    Facets,

    /// Show a summary of the loaded directory
    Stats,

    /// Parse the HDI file on its own and list rows by rank
    Hdi {
        /// Number of rows to print
        #[arg(short = 'n', long, default_value_t = 20)]
        limit: usize,
    },

    /// Manage favorite countries
    #[command(subcommand)]
    Favorites(FavoritesCommand),

    /// List catalog countries without HDI data
    JoinReport,
}

#[derive(Debug, Subcommand)]
pub enum FavoritesCommand {
    /// List favorite countries
    List,

    /// Add or remove a favorite (action: add | remove)
    Set {
        action: String,
        /// Common country name, e.g. "New Zealand"
        country: String,
    },
}
