//! Regular-expression matching over the distinct words of an index.

use crate::error::Result;
use crate::index::types::Position;
use crate::index::Streeng;
use crate::query::executor::QueryExecutor;
use lru::LruCache;
use regex::Regex;
use std::num::NonZeroUsize;
use std::sync::Mutex;
use tracing::debug;

impl QueryExecutor<'_> {
    /// Compile `pattern` and collect the positions of every matching word.
    ///
    /// Fails before doing any work if the pattern does not compile.
    pub fn matches(&self, pattern: &str) -> Result<Vec<Position>> {
        let re = Regex::new(pattern)?;
        Ok(self.matches_regex(&re))
    }

    /// Collect the positions of every word matched by `re`.
    ///
    /// Runs the concurrent traversal and tests only the representative word
    /// of each terminal vertex; every position sharing that vertex holds the
    /// same word. Result order follows the traversal and is unspecified.
    pub fn matches_regex(&self, re: &Regex) -> Vec<Position> {
        let index = self.index();
        let results = Mutex::new(Vec::new());

        index.par_traverse(|node| {
            let Some(first) = node.representative() else {
                return;
            };
            if re.is_match(index.word(first)) {
                let mut results = results.lock().unwrap_or_else(|e| e.into_inner());
                results.extend_from_slice(node.positions());
            }
        });

        let results = results.into_inner().unwrap_or_else(|e| e.into_inner());
        debug!(pattern = re.as_str(), hits = results.len(), "pattern match complete");
        results
    }
}

impl Streeng {
    /// See [`QueryExecutor::matches`]
    pub fn matches(&self, pattern: &str) -> Result<Vec<Position>> {
        QueryExecutor::new(self).matches(pattern)
    }

    /// See [`QueryExecutor::matches_regex`]
    pub fn matches_regex(&self, re: &Regex) -> Vec<Position> {
        QueryExecutor::new(self).matches_regex(re)
    }
}

/// Bounded cache of compiled patterns, keyed by pattern text.
///
/// Lets repeated `matches` calls with the same pattern skip compilation.
pub struct PatternCache {
    cache: Mutex<LruCache<String, Regex>>,
}

impl PatternCache {
    /// Cache holding up to `capacity` patterns (at least one)
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Compiled form of `pattern`, compiling and caching it on a miss
    pub fn get_or_compile(&self, pattern: &str) -> Result<Regex> {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(re) = cache.get(pattern) {
            return Ok(re.clone());
        }
        let re = Regex::new(pattern)?;
        cache.put(pattern.to_string(), re.clone());
        Ok(re)
    }

    /// Run `pattern` against `index`, reusing a cached compilation
    pub fn matches(&self, index: &Streeng, pattern: &str) -> Result<Vec<Position>> {
        let re = self.get_or_compile(pattern)?;
        Ok(index.matches_regex(&re))
    }

    pub fn len(&self) -> usize {
        self.cache.lock().map(|c| c.len()).unwrap_or_else(|e| e.into_inner().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
