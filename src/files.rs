// src/files.rs
use std::fs;
use std::path::Path;

use count_words_core::error::{CountWordsError, Result};

/// Read the whole input file as UTF-8 text.
///
/// Newlines need no substitution here: whitespace splitting in the core
/// already treats them as word separators.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CountWordsError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}
