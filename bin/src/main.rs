//! Stalwart CLI binary.
//!
//! Provides the command-line interface for the stalwart equity screener.

mod cmd;
mod config;
mod logging;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use stalwart_traits::DEFAULT_PERIODS;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "stalwart")]
#[command(about = "Defensive value scorecard for dividend-paying equities", long_about = None)]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// JSON file overriding rating thresholds, Graham multiplier or price lag
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Evaluation date (YYYY-MM-DD, defaults to today)
    #[arg(long, global = true)]
    as_of: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Fixed-width report
    Text,
    /// Derived metrics as JSON
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single ticker
    Evaluate {
        /// Ticker symbol
        ticker: String,

        /// Lookback window in fiscal years
        #[arg(short, long, default_value_t = DEFAULT_PERIODS)]
        periods: usize,

        /// Industry or sector label shown in the report
        #[arg(short, long)]
        industry: Option<String>,
    },

    /// Evaluate every ticker in a watch list
    Screen {
        /// File with whitespace-separated tickers; `#` starts a comment
        file: PathBuf,

        /// Lookback window in fiscal years
        #[arg(short, long, default_value_t = DEFAULT_PERIODS)]
        periods: usize,

        /// Only report tickers satisfying at least this many rules
        #[arg(short, long, default_value_t = cmd::screen::DEFAULT_MIN_SCORE)]
        min_score: u8,
    },

    /// List derived metrics and rating rules
    Metrics {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,

        /// Show detailed information
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let config = config::load(cli.config.as_deref())?;
    let as_of = config::evaluation_date(cli.as_of.as_deref())?;

    match cli.command {
        Commands::Evaluate {
            ticker,
            periods,
            industry,
        } => {
            cmd::evaluate::run(&ticker, periods, industry.as_deref(), as_of, config, cli.format)
                .await?;
        }
        Commands::Screen {
            file,
            periods,
            min_score,
        } => {
            cmd::screen::run(&file, periods, min_score, as_of, config, cli.format).await?;
        }
        Commands::Metrics { category, verbose } => {
            cmd::metrics::list_metrics(category.as_deref(), verbose, &config);
        }
    }

    Ok(())
}
