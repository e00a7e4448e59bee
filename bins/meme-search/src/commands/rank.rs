//! Rank command - one-shot search over a corpus file

use super::{print_ranked, OutputFormat, RankSettings};
use crate::corpus;
use anyhow::Result;
use memeboard_search::rank_with_limit;
use memeboard_telemetry::{metrics, Timer};
use std::path::Path;

/// Run rank command
pub fn run(corpus_path: &Path, query: &str, settings: &RankSettings, format: OutputFormat) -> Result<()> {
    let items = corpus::load(corpus_path)?;

    let timer = Timer::start("search.rank");
    let results = rank_with_limit(&items, query, settings.threshold, settings.limit);
    let elapsed = timer.stop();
    metrics().increment("search.queries");

    tracing::info!(query, matches = results.len(), "Search completed");

    print_ranked(query, &results, settings, items.len(), elapsed, format, true)
}
