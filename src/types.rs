// src/types.rs
use serde::Serialize;

/// Payload for `--format json`.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    pub version: &'static str,
    pub words: Vec<JsonWord>,
    pub summary: JsonSummary,
}

#[derive(Debug, Serialize)]
pub struct JsonWord {
    pub word: String,
    pub count: usize,
}

/// `tokens` and `unique` describe the full table; `shown` the emitted subset
/// after min-count filtering and the top-N limit.
#[derive(Debug, Serialize)]
pub struct JsonSummary {
    pub tokens: usize,
    pub unique: usize,
    pub shown: usize,
}
