//! Relevance scoring for search results.
//!
//! A title is scored against a query by walking an ordered ladder of cheap
//! structural rules (exact, prefix, word-start, substring). The first rule
//! that matches decides the score. When none match, the score falls back to
//! the normalized edit-distance similarity plus a small bonus for a shared
//! leading run.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fuzzy::normalized_similarity;
use crate::normalize::{graphemes, normalize};

/// Weight applied to the shared-prefix ratio in the fallback score.
pub const PREFIX_BONUS_WEIGHT: f64 = 0.1;

/// Which rule produced a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Title equals the query
    Exact,
    /// Title starts with the query
    Prefix,
    /// A whitespace-separated word of the title starts with the query
    WordStart,
    /// Title contains the query
    Substring,
    /// Edit-distance similarity plus prefix bonus
    Fuzzy,
}

impl MatchTier {
    /// Short lowercase name, as used in logs and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::Prefix => "prefix",
            MatchTier::WordStart => "word_start",
            MatchTier::Substring => "substring",
            MatchTier::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score of a title together with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Relevance {
    /// Rule that decided the score
    pub tier: MatchTier,
    /// Score in `[0.0, 1.0]`
    pub score: f64,
}

/// One step of the heuristic ladder.
///
/// `matches` receives the normalized query and the normalized title.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Tier reported when the rule matches
    pub tier: MatchTier,
    /// Fixed score awarded on a match
    pub score: f64,
    /// Predicate over `(query, title)`
    pub matches: fn(&str, &str) -> bool,
}

impl Rule {
    pub const fn new(tier: MatchTier, score: f64, matches: fn(&str, &str) -> bool) -> Self {
        Self { tier, score, matches }
    }
}

/// The standard ladder, evaluated top to bottom.
pub const STANDARD_RULES: &[Rule] = &[
    Rule::new(MatchTier::Exact, 1.00, |query, title| title == query),
    Rule::new(MatchTier::Prefix, 0.95, matches_prefix),
    Rule::new(MatchTier::WordStart, 0.90, matches_word_start),
    Rule::new(MatchTier::Substring, 0.85, matches_substring),
];

// Structural rules compare grapheme clusters, the same unit as the fallback.

fn matches_prefix(query: &str, title: &str) -> bool {
    graphemes(title).starts_with(&graphemes(query))
}

fn matches_word_start(query: &str, title: &str) -> bool {
    let query = graphemes(query);
    title
        .split_whitespace()
        .any(|word| graphemes(word).starts_with(&query))
}

fn matches_substring(query: &str, title: &str) -> bool {
    let query = graphemes(query);
    if query.is_empty() {
        return true;
    }
    graphemes(title).windows(query.len()).any(|window| window == query.as_slice())
}

/// Scores titles against queries with a configurable rule ladder.
///
/// The default scorer uses [`STANDARD_RULES`] and [`PREFIX_BONUS_WEIGHT`].
/// A scorer holds no mutable state and can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct RelevanceScorer {
    rules: Cow<'static, [Rule]>,
    prefix_bonus_weight: f64,
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl RelevanceScorer {
    /// Scorer with the standard ladder.
    pub const fn new() -> Self {
        Self {
            rules: Cow::Borrowed(STANDARD_RULES),
            prefix_bonus_weight: PREFIX_BONUS_WEIGHT,
        }
    }

    /// Scorer with a custom ladder. Rules are tried in the given order.
    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self {
            rules: Cow::Owned(rules),
            prefix_bonus_weight: PREFIX_BONUS_WEIGHT,
        }
    }

    /// Override the weight of the fallback prefix bonus.
    #[must_use]
    pub fn prefix_bonus_weight(mut self, weight: f64) -> Self {
        self.prefix_bonus_weight = weight;
        self
    }

    /// The rules this scorer evaluates, in order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Score a title against a query, in `[0.0, 1.0]`.
    pub fn score(&self, query: &str, title: &str) -> f64 {
        self.score_detailed(query, title).score
    }

    /// Score a title against a query and report which rule matched.
    pub fn score_detailed(&self, query: &str, title: &str) -> Relevance {
        self.score_normalized(&normalize(query), &normalize(title))
    }

    /// Like [`score_detailed`](Self::score_detailed) for inputs that are
    /// already normalized.
    pub(crate) fn score_normalized(&self, query: &str, title: &str) -> Relevance {
        if let Some(rule) = self.rules.iter().find(|rule| (rule.matches)(query, title)) {
            return Relevance {
                tier: rule.tier,
                score: rule.score,
            };
        }

        let similarity = normalized_similarity(query, title);
        let bonus = prefix_ratio(query, title) * self.prefix_bonus_weight;

        Relevance {
            tier: MatchTier::Fuzzy,
            score: (similarity + bonus).min(1.0),
        }
    }
}

/// Calculate relevance score for a title against a query.
///
/// # Arguments
/// * `query` - The search query
/// * `title` - The title to score
///
/// # Returns
/// Relevance score in `[0.0, 1.0]` (higher is better)
///
/// # Example
/// ```
/// use memeboard_search::score;
///
/// assert_eq!(score("chokbar de bz", "Chokbar de BZ"), 1.0);
/// assert_eq!(score("chok", "Chokbar de BZ"), 0.95);
/// assert_eq!(score("grand n", "Le grand n'importe quoi"), 0.85);
/// ```
pub fn score(query: &str, title: &str) -> f64 {
    RelevanceScorer::new().score(query, title)
}

/// Calculate relevance score and the tier that produced it.
pub fn score_detailed(query: &str, title: &str) -> Relevance {
    RelevanceScorer::new().score_detailed(query, title)
}

/// Bonus the fallback tier adds for a shared leading run of graphemes.
///
/// Equal to `(leading matches / query length) * PREFIX_BONUS_WEIGHT`, and
/// `0.0` for a blank query.
pub fn prefix_bonus(query: &str, title: &str) -> f64 {
    prefix_ratio(&normalize(query), &normalize(title)) * PREFIX_BONUS_WEIGHT
}

fn prefix_ratio(query: &str, title: &str) -> f64 {
    let query = graphemes(query);
    if query.is_empty() {
        return 0.0;
    }

    let title = graphemes(title);
    let matched = query
        .iter()
        .zip(title.iter())
        .take_while(|(q, t)| q == t)
        .count();

    matched as f64 / query.len() as f64
}

/// Coarse quality bucket for presenting a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchQuality {
    /// Score below 0.8
    Partial,
    /// Score of at least 0.8
    Good,
    /// Score of at least 0.9
    Precise,
}

impl MatchQuality {
    /// Bucket a score.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.9 {
            MatchQuality::Precise
        } else if score >= 0.8 {
            MatchQuality::Good
        } else {
            MatchQuality::Partial
        }
    }

    /// Marker glyph shown next to a result.
    pub fn marker(self) -> &'static str {
        match self {
            MatchQuality::Precise => "🎯",
            MatchQuality::Good => "✅",
            MatchQuality::Partial => "⭐",
        }
    }

    /// Lowercase name of the bucket.
    pub fn label(self) -> &'static str {
        match self {
            MatchQuality::Precise => "precise",
            MatchQuality::Good => "good",
            MatchQuality::Partial => "partial",
        }
    }
}

/// Render a score as a whole percentage, e.g. `"87%"`.
pub fn format_percentage(score: f64) -> String {
    format!("{:.0}%", score * 100.0)
}
