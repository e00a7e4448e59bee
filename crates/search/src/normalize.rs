//! Text normalization shared by every scoring rule.
//!
//! All comparisons in this crate go through [`normalize`] first so that the
//! heuristic ladder and the edit-distance fallback agree on what counts as an
//! equal character.

use unicode_segmentation::UnicodeSegmentation;

/// Trim surrounding whitespace and case-fold.
///
/// Internal whitespace is preserved as-is.
///
/// # Example
/// ```
/// use memeboard_search::normalize;
///
/// assert_eq!(normalize("  Chokbar de BZ "), "chokbar de bz");
/// ```
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Returns true if the text is empty or whitespace only.
#[inline]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Split text into extended grapheme clusters, the comparison unit for
/// distances, lengths, and the prefix walk.
#[inline]
pub(crate) fn graphemes(text: &str) -> Vec<&str> {
    text.graphemes(true).collect()
}
