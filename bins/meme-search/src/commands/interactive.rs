//! Interactive command - live, debounced search reading queries from stdin

use super::{print_ranked, OutputFormat, RankSettings};
use crate::corpus;
use crate::debounce::debounce;
use anyhow::Result;
use memeboard_cli::output::{format_count, Status};
use memeboard_search::rank_with_limit;
use memeboard_telemetry::{metrics, Timer};
use std::path::Path;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

/// Run interactive command
pub fn run(
    corpus_path: &Path,
    settings: &RankSettings,
    debounce_ms: u64,
    format: OutputFormat,
) -> Result<()> {
    let items = corpus::load(corpus_path)?;
    let delay = Duration::from_millis(debounce_ms);

    if format == OutputFormat::Text {
        Status::success(&format!("Loaded {}", format_count(items.len(), "item", "items")));
        Status::hint(&format!(
            "Type a query per line; results follow {}ms of quiet. Ctrl-D to exit.",
            debounce_ms
        ));
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let (tx, rx) = mpsc::channel(64);
        tokio::spawn(read_queries(tx));

        let mut result = Ok(());
        debounce(rx, delay, |query| {
            if result.is_err() {
                return;
            }

            let timer = Timer::start("search.rank");
            let results = rank_with_limit(&items, &query, settings.threshold, settings.limit);
            let elapsed = timer.stop();
            metrics().increment("search.queries");

            tracing::debug!(query = %query, matches = results.len(), "Query settled");
            result = print_ranked(&query, &results, settings, items.len(), elapsed, format, false);
        })
        .await;

        result
    })
}

/// Forward stdin lines to the debouncer until end of input.
async fn read_queries(tx: mpsc::Sender<String>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if tx.send(line).await.is_err() {
                    break;
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read query");
                break;
            }
        }
    }
}
