//! Score and similarity commands - diagnostics for a single pair

use super::OutputFormat;
use anyhow::Result;
use memeboard_search::{
    format_percentage, levenshtein_distance, normalize, prefix_bonus, score_detailed, similarity,
    MatchQuality, MatchTier,
};
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonScoreOutput<'a> {
    query: &'a str,
    title: &'a str,
    tier: MatchTier,
    score: f64,
    quality: MatchQuality,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix_bonus: Option<f64>,
}

#[derive(Debug, Serialize)]
struct JsonSimilarityOutput<'a> {
    a: &'a str,
    b: &'a str,
    distance: usize,
    similarity: f64,
}

/// Run score command
pub fn run_score(query: &str, title: &str, format: OutputFormat) -> Result<()> {
    let relevance = score_detailed(query, title);
    let quality = MatchQuality::from_score(relevance.score);
    let bonus = (relevance.tier == MatchTier::Fuzzy).then(|| prefix_bonus(query, title));

    if format == OutputFormat::Json {
        let output = JsonScoreOutput {
            query,
            title,
            tier: relevance.tier,
            score: relevance.score,
            quality,
            prefix_bonus: bonus,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("  {:<8} {}", "Tier".dimmed(), relevance.tier.bold());
    println!(
        "  {:<8} {:.4} ({})",
        "Score".dimmed(),
        relevance.score,
        format_percentage(relevance.score)
    );
    println!("  {:<8} {} {}", "Quality".dimmed(), quality.marker(), quality.label());
    if let Some(bonus) = bonus {
        println!("  {:<8} {:.4}", "Bonus".dimmed(), bonus);
    }

    Ok(())
}

/// Run similarity command
pub fn run_similarity(a: &str, b: &str, format: OutputFormat) -> Result<()> {
    let value = similarity(a, b);
    let distance = levenshtein_distance(&normalize(a), &normalize(b));

    if format == OutputFormat::Json {
        let output = JsonSimilarityOutput { a, b, distance, similarity: value };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("  {:<10} {}", "Distance".dimmed(), distance);
    println!("  {:<10} {:.4}", "Similarity".dimmed(), value);

    Ok(())
}
