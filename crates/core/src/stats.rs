use serde::{Deserialize, Serialize};

/// A single counted word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// The word, post-normalization.
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
}

/// Ordered word-frequency result.
///
/// Entries are sorted by descending count; words with equal counts keep the
/// order in which they first appeared in the input. The table is built once
/// per counting pass and not mutated afterwards.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    entries: Vec<WordCount>,
}

impl FrequencyTable {
    pub(crate) fn from_entries(entries: Vec<WordCount>) -> Self {
        Self { entries }
    }

    /// Ordered view of the counted words.
    #[must_use]
    pub fn entries(&self) -> &[WordCount] {
        &self.entries
    }

    /// Look up the count for a word. Keys are post-normalization, so a
    /// case-insensitive table is queried with the lowercased form.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<usize> {
        self.entries.iter().find(|e| e.word == word).map(|e| e.count)
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Totals over the whole table.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            tokens: self.entries.iter().map(|e| e.count).sum(),
            unique: self.entries.len(),
        }
    }

    /// Iterate over `(word, count)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|e| (e.word.as_str(), e.count))
    }
}

/// Derived totals over a `FrequencyTable`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Total token occurrences (sum of all counts).
    pub tokens: usize,
    /// Number of distinct words.
    pub unique: usize,
}
