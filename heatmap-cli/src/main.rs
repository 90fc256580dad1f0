mod commands;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use heatmap_core::{
    Exchange, HeatmapData, Interval, LiquidationEvent, MarketSnapshot, OrderBookSnapshot,
    PositionDistribution, Symbol,
};
use std::io::Read;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::ToolsConfig;

/// Liquidation heatmap stream tools
///
/// Prints the stream keys services agree on, and converts records to and
/// from the flat stream message format.
#[derive(Parser)]
#[command(name = "heatmap-tools")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every stream and cache key for a trading pair
    Keys {
        /// Exchange (binance, okx, bybit, coinbase, kraken, deribit, bitfinex)
        #[arg(short, long)]
        exchange: Option<String>,

        /// Trading pair, e.g. BTCUSDT
        #[arg(short, long)]
        symbol: Option<String>,

        /// Heatmap interval for the cache key (unknown values fall back to 1m)
        #[arg(short, long)]
        interval: Option<String>,
    },

    /// Read a JSON record on stdin, validate it and print its stream message
    Encode {
        #[arg(short, long, value_enum)]
        kind: RecordKind,

        /// Override the record's own stream name
        #[arg(long)]
        stream: Option<String>,
    },

    /// Read a stream message on stdin and print the validated record
    Decode {
        #[arg(short, long, value_enum)]
        kind: RecordKind,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RecordKind {
    Liquidation,
    Market,
    Orderbook,
    Positions,
    Heatmap,
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;
    Ok(input)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = ToolsConfig::default();
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "heatmap_tools={},heatmap_stream={},heatmap_core={}",
                config.log_level, config.log_level, config.log_level
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Command::Keys {
            exchange,
            symbol,
            interval,
        } => {
            if let Some(exchange) = exchange {
                config.exchange = exchange.parse::<Exchange>()?;
            }
            if let Some(symbol) = symbol {
                config.symbol = Symbol::new(symbol);
            }
            if let Some(interval) = interval {
                config.interval = Interval::lookup(&interval);
            }

            tracing::debug!("Keys for {:?}", config);
            for key in commands::keys(&config) {
                println!("{}", key);
            }
        }

        Command::Encode { kind, stream } => {
            let input = read_stdin()?;
            let stream = stream.as_deref();
            let message = match kind {
                RecordKind::Liquidation => {
                    commands::encode_record::<LiquidationEvent>(&input, stream)?
                }
                RecordKind::Market => commands::encode_record::<MarketSnapshot>(&input, stream)?,
                RecordKind::Orderbook => {
                    commands::encode_record::<OrderBookSnapshot>(&input, stream)?
                }
                RecordKind::Positions => {
                    commands::encode_record::<PositionDistribution>(&input, stream)?
                }
                RecordKind::Heatmap => commands::encode_record::<HeatmapData>(&input, stream)?,
            };
            println!("{}", serde_json::to_string_pretty(&message)?);
        }

        Command::Decode { kind } => {
            let input = read_stdin()?;
            let record = match kind {
                RecordKind::Liquidation => commands::decode_record::<LiquidationEvent>(&input)?,
                RecordKind::Market => commands::decode_record::<MarketSnapshot>(&input)?,
                RecordKind::Orderbook => commands::decode_record::<OrderBookSnapshot>(&input)?,
                RecordKind::Positions => commands::decode_record::<PositionDistribution>(&input)?,
                RecordKind::Heatmap => commands::decode_record::<HeatmapData>(&input)?,
            };
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }

    Ok(())
}
