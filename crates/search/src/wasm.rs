//! WASM bindings for search utilities.

use wasm_bindgen::prelude::*;

/// Normalized similarity between two strings (0.0 to 1.0).
#[wasm_bindgen]
pub fn similarity(a: &str, b: &str) -> f64 {
    crate::similarity(a, b)
}

/// Calculate relevance score for a query against a title.
///
/// # Returns
/// Relevance score (0.0 to 1.0, higher is better)
#[wasm_bindgen]
pub fn relevance_score(query: &str, title: &str) -> f64 {
    crate::score(query, title)
}

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::levenshtein_distance(a, b)
}

/// Search items and return ranked results as JSON.
///
/// # Arguments
/// * `query` - Search query
/// * `items_json` - JSON array of items with `id` and `title` fields
/// * `threshold` - Minimum score to keep (0.65 in the gallery)
/// * `max_results` - Maximum results to return (0 for all)
///
/// # Returns
/// JSON array of items with a `similarityScore` field, sorted by score.
/// Malformed input yields `"[]"`.
#[wasm_bindgen]
pub fn search_items(query: &str, items_json: &str, threshold: f64, max_results: usize) -> String {
    let limit = (max_results > 0).then_some(max_results);

    crate::rank_json(items_json, query, threshold, limit).unwrap_or_else(|_| "[]".to_string())
}
