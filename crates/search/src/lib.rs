//! Fuzzy title ranking for Memeboard.
//!
//! This crate provides:
//! - Normalized Levenshtein similarity over grapheme clusters
//! - A tiered relevance ladder (exact, prefix, word start, substring, fuzzy)
//! - Threshold filtering and stable ranking over an in-memory corpus
//! - Optional rayon-parallel scoring and WASM bindings
//!
//! # Example
//!
//! ```
//! use memeboard_search::{rank, Item, DEFAULT_THRESHOLD};
//!
//! let items = vec![
//!     Item::new("1", "Chat qui dort"),
//!     Item::new("2", "Chokbar de BZ"),
//!     Item::new("3", "Le grand n'importe quoi"),
//! ];
//!
//! let results = rank(&items, "chokbar de bz", DEFAULT_THRESHOLD);
//! assert_eq!(results[0].item.id, "2");
//! assert_eq!(results[0].similarity_score, 1.0);
//! ```

mod error;
mod fuzzy;
mod normalize;
mod rank;
mod relevance;

#[cfg(feature = "wasm")]
mod wasm;

use serde::{Deserialize, Serialize};

pub use error::{Result, SearchError, SearchErrorCode};
pub use fuzzy::{levenshtein_distance, similarity};
pub use normalize::{is_blank, normalize};
pub use rank::{filter_by_similarity, rank, rank_with_limit};
pub use relevance::{
    format_percentage, prefix_bonus, score, score_detailed, MatchQuality, MatchTier, Relevance,
    RelevanceScorer, Rule, PREFIX_BONUS_WEIGHT, STANDARD_RULES,
};

/// Threshold used when the caller has no preference.
pub const DEFAULT_THRESHOLD: f64 = 0.65;

/// Anything with a title that can be matched against a query.
pub trait Titled {
    /// The text to match. Absent titles should be reported as `""`.
    fn title(&self) -> &str;
}

impl Titled for str {
    fn title(&self) -> &str {
        self
    }
}

impl Titled for String {
    fn title(&self) -> &str {
        self
    }
}

impl<T: Titled + ?Sized> Titled for &T {
    fn title(&self) -> &str {
        (**self).title()
    }
}

/// A corpus entry as delivered by the data layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Identifier used by the caller; ignored by scoring
    pub id: String,
    /// Display title; `None` is scored as an empty title
    #[serde(default)]
    pub title: Option<String>,
}

impl Item {
    /// Creates a new item with a title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
        }
    }
}

impl Titled for Item {
    fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

/// An item paired with its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem<T> {
    /// The matched item
    #[serde(flatten)]
    pub item: T,
    /// Relevance score in `[0.0, 1.0]` (higher is better)
    #[serde(rename = "similarityScore")]
    pub similarity_score: f64,
}

impl<T> ScoredItem<T> {
    /// Pair an item with its score.
    #[inline]
    pub fn new(item: T, similarity_score: f64) -> Self {
        Self { item, similarity_score }
    }

    /// Presentation bucket for this score.
    pub fn quality(&self) -> MatchQuality {
        MatchQuality::from_score(self.similarity_score)
    }
}

/// Rank a JSON corpus and return the results as JSON.
///
/// # Arguments
/// * `items_json` - JSON array of objects with `id` and `title` fields
/// * `query` - Search query
/// * `threshold` - Minimum score (inclusive)
/// * `limit` - Maximum results to return (`None` for all)
///
/// # Returns
/// JSON array of `{id, title, similarityScore}` objects sorted by score.
///
/// # Errors
/// Returns [`SearchError::InvalidCorpus`] if `items_json` is not an array of items.
pub fn rank_json(items_json: &str, query: &str, threshold: f64, limit: Option<usize>) -> Result<String> {
    let items: Vec<Item> = serde_json::from_str(items_json)?;
    let results = rank_with_limit(&items, query, threshold, limit);

    serde_json::to_string(&results).map_err(|e| SearchError::Serialization(e.to_string()))
}
