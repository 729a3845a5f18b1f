//! playerhands CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use playerhands::cli::{Cli, Commands, OutputFormat};
use playerhands::output::{format_hand, format_hands, format_json};
use playerhands::storage::DynamoDbHandRepository;
use playerhands::{Config, HandStore};
use playerhands_core::hand::HandRecord;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "playerhands=info,playerhands_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::from_env().context("invalid configuration")?;
    if let Some(table_name) = cli.table_name {
        config.table_name = table_name;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        anyhow::ensure!(timeout_ms > 0, "--timeout-ms must be greater than zero");
        config.timeout_ms = timeout_ms;
    }

    tracing::debug!(
        table = %config.table_name,
        timeout_ms = config.timeout_ms,
        max_query_pages = config.max_query_pages,
        on_timeout = ?config.on_timeout,
        "Loaded configuration"
    );

    let repository = DynamoDbHandRepository::from_env(config.table_name.clone())
        .await
        .with_max_query_pages(config.max_query_pages);
    let store = HandStore::new(repository).with_bounded(config.bounded());

    match cli.command {
        Commands::Add {
            game_version,
            player_id,
            player_name,
            cards,
        } => {
            let hand = HandRecord::new(game_version, player_id)
                .with_player_name(player_name)
                .with_cards(cards);
            store.add_hand(&hand).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_json(&hand)),
                OutputFormat::Pretty => println!("Stored:\n{}", format_hand(&hand)),
            }
        }
        Commands::Query { game_version } => {
            let hands = store.query_hands(&game_version).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_json(&hands)),
                OutputFormat::Pretty => println!("{}", format_hands(&hands)),
            }
        }
        Commands::Choose { game_version } => {
            let chosen = store.choose_hand(&game_version).await?;
            match (chosen, cli.format) {
                (Some(hand), OutputFormat::Json) => {
                    println!("{}", format_json(&hand))
                }
                (Some(hand), OutputFormat::Pretty) => println!("{}", format_hand(&hand)),
                (None, OutputFormat::Json) => println!("null"),
                (None, OutputFormat::Pretty) => {
                    println!("No hands found for version {game_version}.")
                }
            }
        }
    }

    Ok(())
}
