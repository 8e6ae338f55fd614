use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Zero-based index of a word in the corpus. Every query reports these.
pub type Position = usize;

/// Ordinal assigned to a distinct word by the term collector (starts at 1)
pub type TermId = usize;

/// Distinct word -> number of occurrences in the corpus
pub type TermMap = AHashMap<String, usize>;

/// Order in which a word's characters are fed into a trie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Front to back, the forward trie (exact and prefix queries)
    Forward,
    /// Back to front, the reverse trie (suffix queries)
    Reverse,
}

/// Configuration for building and querying an index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Build the reverse trie at construction instead of on demand
    #[serde(default)]
    pub build_reverse: bool,
    /// Number of compiled patterns kept by a `PatternCache`
    #[serde(default = "default_pattern_cache_size")]
    pub pattern_cache_size: usize,
    /// Default minimum frequency for term listings
    #[serde(default)]
    pub min_frequency: usize,
    /// Worker threads for concurrent traversal (0 = rayon default)
    #[serde(default)]
    pub threads: usize,
}

fn default_pattern_cache_size() -> usize {
    64
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            build_reverse: false,
            pattern_cache_size: default_pattern_cache_size(),
            min_frequency: 0,
            threads: 0,
        }
    }
}
