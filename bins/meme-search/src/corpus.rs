//! Corpus loading
//!
//! A corpus file is either a bare JSON array of items or an API response
//! with the array under `data`. Identifiers may be strings or numbers.

use memeboard_core::{Error, ErrorCode, Result, ResultExt};
use memeboard_search::Item;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum CorpusFile {
    Items(Vec<RawItem>),
    Response { data: Vec<RawItem> },
}

#[derive(Deserialize)]
struct RawItem {
    id: serde_json::Value,
    #[serde(default)]
    title: Option<String>,
}

impl From<RawItem> for Item {
    fn from(raw: RawItem) -> Self {
        let id = match raw.id {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        Item { id, title: raw.title }
    }
}

/// Parse corpus JSON text.
pub fn parse(json: &str) -> Result<Vec<Item>> {
    let file: CorpusFile = serde_json::from_str(json).map_err(|e| {
        Error::new(ErrorCode::InvalidFormat, format!("Invalid corpus JSON: {}", e))
            .with_suggestion("Expected an array of {\"id\", \"title\"} objects, or {\"data\": [...]}")
            .with_source(e)
    })?;

    let raw = match file {
        CorpusFile::Items(items) | CorpusFile::Response { data: items } => items,
    };

    Ok(raw.into_iter().map(Item::from).collect())
}

/// Read and parse a corpus file.
pub fn load(path: &Path) -> Result<Vec<Item>> {
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    let json = std::fs::read_to_string(path)?;
    let items = parse(&json).context(format!("Loading corpus {}", path.display()))?;

    tracing::debug!(path = %path.display(), items = items.len(), "Corpus loaded");
    Ok(items)
}
