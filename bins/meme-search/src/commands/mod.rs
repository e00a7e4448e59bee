//! CLI command implementations

pub mod interactive;
pub mod rank;
pub mod score;

use clap::ValueEnum;
use memeboard_cli::output::{format_count, format_duration, Status};
use memeboard_search::{format_percentage, Item, ScoredItem, Titled};
use serde::Serialize;
use std::time::Duration;

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Settings shared by commands that rank a corpus
#[derive(Debug, Clone)]
pub struct RankSettings {
    pub threshold: f64,
    pub limit: Option<usize>,
}

/// JSON output for one ranked query
#[derive(Debug, Serialize)]
struct JsonRankOutput<'a> {
    query: &'a str,
    threshold: f64,
    corpus: usize,
    elapsed_us: u64,
    results: &'a [ScoredItem<&'a Item>],
}

/// Print ranked results for a query.
///
/// `pretty` selects indented JSON; interactive mode prints one object per line.
pub fn print_ranked(
    query: &str,
    results: &[ScoredItem<&Item>],
    settings: &RankSettings,
    corpus: usize,
    elapsed: Duration,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        let output = JsonRankOutput {
            query,
            threshold: settings.threshold,
            corpus,
            elapsed_us: elapsed.as_micros() as u64,
            results,
        };
        let json = if pretty {
            serde_json::to_string_pretty(&output)?
        } else {
            serde_json::to_string(&output)?
        };
        println!("{}", json);
        return Ok(());
    }

    if results.is_empty() {
        Status::warning(&format!(
            "No matches for \"{}\" at threshold {}",
            query, settings.threshold
        ));
        return Ok(());
    }

    Status::header(&format!(
        "{} for \"{}\"",
        format_count(results.len(), "match", "matches"),
        query
    ));
    for (position, result) in results.iter().enumerate() {
        let column = format!(
            "{} {:>4}",
            result.quality().marker(),
            format_percentage(result.similarity_score)
        );
        Status::result(position + 1, &column, result.item.title());
    }
    Status::hint(&format!(
        "Ranked {} in {}",
        format_count(corpus, "item", "items"),
        format_duration(elapsed)
    ));

    Ok(())
}
