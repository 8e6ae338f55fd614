//! # Streeng - In-Memory Trie Word Index
//!
//! Streeng indexes a fixed, ordered corpus of words in a character trie and
//! answers exact, prefix, suffix and regular-expression queries against it,
//! along with per-word frequency statistics.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Trie vertices, forward/reverse builders, traversal and term collection
//! - [`query`] - Exact, prefix, suffix, membership and pattern queries
//! - [`output`] - Result formatting (colored text or JSON)
//! - [`utils`] - Configuration, text sources, word splitting
//!
//! ## Quick Start
//!
//! ```
//! use streeng::Streeng;
//!
//! let mut index = Streeng::new(["cat", "car", "cats", "dog"]);
//! assert_eq!(index.search("cat"), &[0]);
//!
//! let mut prefixed = index.start_with("ca");
//! prefixed.sort();
//! assert_eq!(prefixed, vec![0, 1, 2]);
//!
//! // Suffix queries need the reverse trie
//! assert!(index.end_with("t").is_empty());
//! index.build_reverse();
//! assert_eq!(index.end_with("t"), vec![0]);
//!
//! assert!(!index.contains("ca"));
//! assert_eq!(index.terms().get("dog"), Some(&1));
//! ```
//!
//! Every query reports corpus positions: zero-based indexes into the word
//! list the index was built from.

pub mod error;
pub mod index;
pub mod output;
pub mod query;
pub mod utils;

pub use error::{Result, StreengError};
pub use index::{IndexConfig, IndexStats, Node, Position, Streeng, TermId, TermMap};
pub use query::{PatternCache, QueryExecutor};
