//! Edit-distance metrics.
//!
//! Distances are counted in extended grapheme clusters, so a letter with a
//! combining accent costs a single edit just like a precomposed one.

use crate::normalize::{graphemes, normalize};

/// Calculate Levenshtein edit distance between two strings.
///
/// The inputs are compared as given; no trimming or case-folding is applied.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-grapheme insertions, deletions, and substitutions needed
/// to transform `a` into `b`
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    edit_distance(&graphemes(a), &graphemes(b))
}

/// Normalized similarity between two strings in `[0.0, 1.0]`.
///
/// Both inputs are trimmed and case-folded first. Equal inputs score `1.0`
/// (including two blank strings); if exactly one side is blank the score is
/// `0.0`. Otherwise the result is `1 - distance / max(len(a), len(b))`.
///
/// # Example
/// ```
/// use memeboard_search::similarity;
///
/// assert_eq!(similarity("Hello", " hello "), 1.0);
/// assert_eq!(similarity("", "hello"), 0.0);
/// assert!((similarity("hello", "hallo") - 0.8).abs() < 1e-12);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);
    normalized_similarity(&a, &b)
}

/// Similarity for inputs that already went through [`normalize`].
pub(crate) fn normalized_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a = graphemes(a);
    let b = graphemes(b);
    let distance = edit_distance(&a, &b);
    let max_len = a.len().max(b.len());

    1.0 - distance as f64 / max_len as f64
}

fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 { return n; }
    if n == 0 { return m; }

    // Use two rows for space optimization
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
