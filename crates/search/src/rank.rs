//! Ranked search over an in-memory corpus.
//!
//! Every item is scored against the query, items below the threshold are
//! dropped, and the survivors are sorted by descending score. The sort is
//! stable: items with equal scores keep their input order.

use std::time::Instant;

use crate::normalize::{is_blank, normalize};
use crate::relevance::RelevanceScorer;
use crate::{ScoredItem, Titled};

impl RelevanceScorer {
    /// Score, filter, and sort `items` for `query`.
    ///
    /// A blank query returns every item in input order with score `1.0`,
    /// regardless of `threshold`.
    pub fn rank<'a, T>(&self, items: &'a [T], query: &str, threshold: f64) -> Vec<ScoredItem<&'a T>>
    where
        T: Titled + Sync,
    {
        if is_blank(query) {
            return items.iter().map(|item| ScoredItem::new(item, 1.0)).collect();
        }

        let started = Instant::now();
        let query_norm = normalize(query);

        let mut results: Vec<ScoredItem<&'a T>> = self
            .score_all(items, &query_norm)
            .into_iter()
            .zip(items)
            .filter(|(score, _)| *score >= threshold)
            .map(|(score, item)| ScoredItem::new(item, score))
            .collect();

        results.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));

        tracing::debug!(
            query = %query_norm,
            corpus = items.len(),
            matches = results.len(),
            threshold,
            elapsed_us = started.elapsed().as_micros() as u64,
            "ranked corpus"
        );

        results
    }

    /// Keep the items scoring at least `threshold`, in input order.
    ///
    /// A blank query returns every item.
    pub fn filter<'a, T>(&self, items: &'a [T], query: &str, threshold: f64) -> Vec<&'a T>
    where
        T: Titled + Sync,
    {
        if is_blank(query) {
            return items.iter().collect();
        }

        let query_norm = normalize(query);
        self.score_all(items, &query_norm)
            .into_iter()
            .zip(items)
            .filter(|(score, _)| *score >= threshold)
            .map(|(_, item)| item)
            .collect()
    }

    /// Score every item in input order.
    fn score_all<T>(&self, items: &[T], query_norm: &str) -> Vec<f64>
    where
        T: Titled + Sync,
    {
        let score_one = |item: &T| {
            let relevance = self.score_normalized(query_norm, &normalize(item.title()));
            tracing::trace!(title = item.title(), tier = %relevance.tier, score = relevance.score);
            relevance.score
        };

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            items.par_iter().map(score_one).collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            items.iter().map(score_one).collect()
        }
    }
}

/// Rank items by relevance to a query using the standard ladder.
///
/// # Arguments
/// * `items` - Corpus snapshot; never mutated
/// * `query` - Search query; blank queries pass every item through
/// * `threshold` - Minimum score (inclusive) for an item to be kept
///
/// # Returns
/// Matching items sorted by descending score, ties in input order.
///
/// # Example
/// ```
/// use memeboard_search::{rank, Item};
///
/// let items = vec![
///     Item::new("1", "Le grand n'importe quoi"),
///     Item::new("2", "Chokbar de BZ"),
/// ];
///
/// let results = rank(&items, "chok", 0.65);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].item.id, "2");
/// ```
pub fn rank<'a, T>(items: &'a [T], query: &str, threshold: f64) -> Vec<ScoredItem<&'a T>>
where
    T: Titled + Sync,
{
    RelevanceScorer::new().rank(items, query, threshold)
}

/// Rank items and keep at most `limit` of them (`None` for all).
pub fn rank_with_limit<'a, T>(
    items: &'a [T],
    query: &str,
    threshold: f64,
    limit: Option<usize>,
) -> Vec<ScoredItem<&'a T>>
where
    T: Titled + Sync,
{
    let mut results = rank(items, query, threshold);

    if let Some(max) = limit {
        results.truncate(max);
    }

    results
}

/// Keep items whose title scores at least `threshold`, preserving input order.
pub fn filter_by_similarity<'a, T>(items: &'a [T], query: &str, threshold: f64) -> Vec<&'a T>
where
    T: Titled + Sync,
{
    RelevanceScorer::new().filter(items, query, threshold)
}
