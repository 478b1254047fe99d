use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "match-the-hatch")]
#[command(
    about = "Plan a fly-fishing trip: AI-predicted insect hatches, fly patterns, and tying materials",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print request/response details
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict insect hatches and fly patterns for a trip
    Plan {
        /// Destination, e.g. "Wyoming"
        #[arg(short, long)]
        location: Option<String>,

        /// Body of water, e.g. "Green River"
        #[arg(short, long)]
        water: Option<String>,

        /// Target species, e.g. "Cutthroat Trout"
        #[arg(short, long)]
        species: Option<String>,

        /// Season or timeframe, e.g. "Early July"
        #[arg(long)]
        season: Option<String>,
    },

    /// Generate a tying material shopping list for a saved trip
    Materials {
        /// Trip key (see `match-the-hatch trips`)
        #[arg(required = true)]
        trip: String,
    },

    /// List saved trips
    Trips,

    /// Export a trip's shopping list as CSV
    Export {
        /// Trip key (see `match-the-hatch trips`)
        #[arg(required = true)]
        trip: String,

        /// Output CSV file
        #[arg(short, long, default_value = "materials_shopping_list.csv")]
        output: PathBuf,
    },

    /// Show or edit configuration
    Config {
        /// Set the Pulze API key
        #[arg(long)]
        set_api_key: Option<String>,

        /// Show current settings
        #[arg(long)]
        show: bool,
    },
}
