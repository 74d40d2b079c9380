// src/config.rs
use std::path::PathBuf;

use count_words_core::config::CountConfig;

use crate::cli::OutputFormat;

/// Top-level configuration derived from CLI arguments.
#[derive(Debug)]
pub struct Config {
    pub format: OutputFormat,
    /// Minimum occurrence count for a word to be printed.
    pub min_count: usize,
    /// Show only the first N qualifying words.
    pub top: Option<usize>,
    pub total_row: bool,
    pub output: Option<PathBuf>,
    pub count: CountConfig,
    pub input: PathBuf,
}
