//! meme-search: fuzzy title search over a meme corpus.
//!
//! Ranks items from a JSON corpus file against a query, explains individual
//! scores, and offers a debounced live-search mode fed from stdin.

use clap::{Parser, Subcommand};
use memeboard_cli::output::Status;
use memeboard_core::config::Config;
use memeboard_core::error::exit_codes;
use memeboard_telemetry::TelemetryConfig;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod corpus;
mod debounce;

use commands::{OutputFormat, RankSettings};

/// Fuzzy title search over a meme corpus
#[derive(Parser)]
#[command(name = "meme-search")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to .memeboard.toml if present)
    #[arg(short, long, global = true, env = "MEMEBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Print collected metrics to stderr on exit
    #[arg(long, global = true)]
    stats: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank a corpus against a query
    Rank {
        /// JSON corpus: [{"id", "title"}, ...] or {"data": [...]}
        corpus: PathBuf,

        /// Search query; an empty query lists the whole corpus
        query: String,

        /// Minimum score to keep (inclusive)
        #[arg(short, long, allow_negative_numbers = true)]
        threshold: Option<f64>,

        /// Maximum results to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Explain the score of a title for a query
    Score {
        /// Search query
        query: String,

        /// Title to score
        title: String,
    },

    /// Normalized edit-distance similarity between two strings
    Similarity {
        a: String,
        b: String,
    },

    /// Live search: read queries from stdin, rank after a quiet period
    Interactive {
        /// JSON corpus file
        corpus: PathBuf,

        /// Minimum score to keep (inclusive)
        #[arg(short, long, allow_negative_numbers = true)]
        threshold: Option<f64>,

        /// Maximum results to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Quiet period in milliseconds before a query is ranked
        #[arg(short, long)]
        debounce_ms: Option<u64>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = cli.format;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let core_err = e.downcast_ref::<memeboard_core::Error>();
            report_error(&e, core_err, format);
            let code = core_err.map_or(exit_codes::FAILURE, |err| err.code.exit_code());
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

/// Print a failure to stderr; coded errors become a JSON report in JSON mode
fn report_error(e: &anyhow::Error, core_err: Option<&memeboard_core::Error>, format: OutputFormat) {
    if format == OutputFormat::Json {
        if let Some(report) = core_err.and_then(|err| serde_json::to_string(&err.to_report()).ok()) {
            eprintln!("{report}");
            return;
        }
    }
    Status::error(&e.to_string());
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let schema = &config.schema;

    memeboard_telemetry::init_with_config(TelemetryConfig {
        log_level: if cli.verbose { "debug".to_string() } else { schema.logging.level.clone() },
        show_target: schema.logging.show_target,
        ..TelemetryConfig::default()
    })?;

    if let Some(path) = &config.path {
        tracing::debug!(path = %path.display(), "Configuration loaded");
    }

    let settings = |threshold: Option<f64>, limit: Option<usize>| RankSettings {
        threshold: threshold.unwrap_or(schema.search.threshold),
        limit: limit.or(schema.search.limit),
    };

    match cli.command {
        Commands::Rank { corpus, query, threshold, limit } => {
            commands::rank::run(&corpus, &query, &settings(threshold, limit), cli.format)?;
        }

        Commands::Score { query, title } => commands::score::run_score(&query, &title, cli.format)?,

        Commands::Similarity { a, b } => commands::score::run_similarity(&a, &b, cli.format)?,

        Commands::Interactive { corpus, threshold, limit, debounce_ms } => {
            commands::interactive::run(
                &corpus,
                &settings(threshold, limit),
                debounce_ms.unwrap_or(schema.search.debounce_ms),
                cli.format,
            )?;
        }
    }

    if cli.stats {
        eprintln!("{}", serde_json::to_string_pretty(&memeboard_telemetry::metrics().export_json())?);
    }

    Ok(())
}
