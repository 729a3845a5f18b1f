//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};

/// Store and pick player hands.
#[derive(Debug, Parser)]
#[command(name = "playerhands")]
#[command(version, about = "Store and pick player hands", long_about = None)]
pub struct Cli {
    /// DynamoDB table name. Overrides PLAYER_HAND_TABLE_NAME.
    #[arg(long)]
    pub table_name: Option<String>,

    /// Per-call timeout in milliseconds. Overrides HAND_STORE_TIMEOUT_MS.
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Store a hand, replacing any hand of the same player and version.
    Add {
        /// Game version (partition key).
        #[arg(value_name = "VERSION")]
        game_version: String,
        /// Player id (sort key).
        player_id: String,
        /// Player display name.
        #[arg(long, default_value = "")]
        player_name: String,
        /// Card ids, comma separated.
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        cards: Vec<i64>,
    },
    /// List every hand stored for a version.
    Query {
        /// Game version (partition key).
        #[arg(value_name = "VERSION")]
        game_version: String,
    },
    /// Pick one hand of a version at random.
    Choose {
        /// Game version (partition key).
        #[arg(value_name = "VERSION")]
        game_version: String,
    },
}
