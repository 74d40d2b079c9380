// crates/core/src/counter.rs
use std::collections::HashMap;

use crate::config::CountConfig;
use crate::stats::{FrequencyTable, WordCount};

/// Count word frequencies in a string.
///
/// This is the core entry point for the library.
/// Characters in `config.ignore_chars` act as word separators, so splitting
/// on whitespace-or-ignored characters and discarding empty tokens yields the
/// same sequence as substituting them with spaces first. Punctuation outside
/// the ignore set stays fused to its word.
#[must_use]
pub fn count_text(input: &str, config: &CountConfig) -> FrequencyTable {
    let mut entries: Vec<WordCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    let tokens = input
        .split(|c: char| c.is_whitespace() || config.ignore_chars.contains(&c))
        .filter(|t| !t.is_empty());

    // Aggregate in first-seen order; the sort below is stable, so words with
    // equal counts keep this order.
    for token in tokens {
        let word = if config.case_sensitive {
            token.to_string()
        } else {
            token.to_lowercase()
        };
        match index.get(&word) {
            Some(&i) => entries[i].count += 1,
            None => {
                index.insert(word.clone(), entries.len());
                entries.push(WordCount { word, count: 1 });
            }
        }
    }

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    FrequencyTable::from_entries(entries)
}
