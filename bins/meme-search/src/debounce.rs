//! Query debouncing for live search.
//!
//! Keystroke-driven queries arrive faster than it is useful to rank them.
//! Each new query restarts the quiet period; only the query still pending
//! when the period elapses is handed on. Superseded queries are dropped.

use std::time::Duration;
use tokio::sync::mpsc;

/// Coalesce queries from `queries`, calling `on_settled` with each query that
/// stays unchanged for `delay`.
///
/// When the channel closes, a pending query is flushed immediately.
pub async fn debounce<F>(mut queries: mpsc::Receiver<String>, delay: Duration, mut on_settled: F)
where
    F: FnMut(String),
{
    while let Some(mut latest) = queries.recv().await {
        loop {
            tokio::select! {
                next = queries.recv() => match next {
                    Some(query) => {
                        tracing::trace!(superseded = %latest, "Query superseded");
                        latest = query;
                    }
                    None => {
                        on_settled(latest);
                        return;
                    }
                },
                () = tokio::time::sleep(delay) => {
                    on_settled(latest);
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_to_last_query() {
        let (tx, rx) = mpsc::channel(16);
        let handle = tokio::spawn(async move {
            let mut settled = Vec::new();
            debounce(rx, DELAY, |q| settled.push(q)).await;
            settled
        });

        for q in ["c", "ch", "cho", "chok"] {
            tx.send(q.to_string()).await.unwrap();
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        tokio::time::sleep(DELAY * 2).await;
        drop(tx);

        assert_eq!(handle.await.unwrap(), vec!["chok"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separated_queries_all_settle() {
        let (tx, rx) = mpsc::channel(16);
        let handle = tokio::spawn(async move {
            let mut settled = Vec::new();
            debounce(rx, DELAY, |q| settled.push(q)).await;
            settled
        });

        tx.send("chat".to_string()).await.unwrap();
        tokio::time::sleep(DELAY * 2).await;
        tx.send("chien".to_string()).await.unwrap();
        tokio::time::sleep(DELAY * 2).await;
        drop(tx);

        assert_eq!(handle.await.unwrap(), vec!["chat", "chien"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_query_flushed_on_close() {
        let (tx, rx) = mpsc::channel(16);
        let handle = tokio::spawn(async move {
            let mut settled = Vec::new();
            debounce(rx, DELAY, |q| settled.push(q)).await;
            settled
        });

        tx.send("first".to_string()).await.unwrap();
        tx.send("second".to_string()).await.unwrap();
        drop(tx);

        assert_eq!(handle.await.unwrap(), vec!["second"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_queries() {
        let (tx, rx) = mpsc::channel::<String>(1);
        drop(tx);

        let mut settled = Vec::new();
        debounce(rx, DELAY, |q| settled.push(q)).await;
        assert!(settled.is_empty());
    }
}
