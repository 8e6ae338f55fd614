pub mod build;
pub mod node;
pub mod stats;
pub mod terms;
pub mod traverse;
pub mod types;

pub use build::{build_trie, BuiltTrie, TrieBuilder};
pub use node::{Node, Terminals};
pub use stats::IndexStats;
pub use types::*;

use crate::utils::split_words_ref;
use tracing::debug;

/// In-memory word index over a fixed, ordered corpus.
///
/// The forward trie is built eagerly and never mutated afterwards. The
/// reverse trie is built on demand by [`Streeng::build_reverse`]. Term
/// statistics are filled in by [`Streeng::terms`].
#[derive(Debug)]
pub struct Streeng {
    pub(crate) root: Node,
    pub(crate) reverse_root: Option<Node>,
    pub(crate) words: Vec<String>,
    pub(crate) node_count: usize,
    pub(crate) reverse_count: Option<usize>,
    pub(crate) depth: usize,
    pub(crate) terms: Option<TermMap>,
    pub(crate) tokens: Vec<Option<TermId>>,
    pub(crate) density: f64,
}

impl Streeng {
    /// Index `words`, building the forward trie.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let built = build_trie(&words, Direction::Forward);

        // The root is counted in the forward node count
        let node_count = built.created + 1;
        let density = words.len() as f64 / node_count as f64;
        let tokens = vec![None; words.len()];

        debug!(
            words = words.len(),
            node_count,
            depth = built.depth,
            density,
            "built forward trie"
        );

        Self {
            root: built.root,
            reverse_root: None,
            words,
            node_count,
            reverse_count: None,
            depth: built.depth,
            terms: None,
            tokens,
            density,
        }
    }

    /// Index `words`, applying the construction options of `config`
    pub fn with_config<I, S>(words: I, config: &IndexConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut streeng = Self::new(words);
        if config.build_reverse {
            streeng.build_reverse();
        }
        streeng
    }

    /// Split `text` on whitespace and index the resulting words
    pub fn from_text(text: &str) -> Self {
        Self::new(split_words_ref(text))
    }

    /// Build the reverse trie, replacing any previous one.
    pub fn build_reverse(&mut self) -> &Node {
        let built = build_trie(&self.words, Direction::Reverse);
        debug!(node_count = built.created, "built reverse trie");
        self.reverse_count = Some(built.created);
        self.reverse_root.insert(built.root)
    }

    /// Release both tries and all derived data.
    ///
    /// Must not run while any traversal or query holds a reference to this
    /// index; the borrow checker enforces this.
    pub fn clean(&mut self) {
        self.root.clear();
        self.reverse_root = None;
        self.words = Vec::new();
        self.node_count = 1;
        self.reverse_count = None;
        self.depth = 0;
        self.terms = None;
        self.tokens = Vec::new();
        self.density = 0.0;
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Root of the reverse trie, if it has been built
    pub fn reverse_root(&self) -> Option<&Node> {
        self.reverse_root.as_ref()
    }

    pub fn has_reverse(&self) -> bool {
        self.reverse_root.is_some()
    }

    /// Longest word in the corpus, in characters
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Vertices in the forward trie, root included
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Vertices created in the reverse trie, `None` until it is built
    pub fn reverse_node_count(&self) -> Option<usize> {
        self.reverse_count
    }

    /// Corpus size divided by forward node count
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Word at `position`, or `""` when out of range
    pub fn word(&self, position: Position) -> &str {
        self.words.get(position).map(String::as_str).unwrap_or("")
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Term frequencies from the last collector run
    pub fn term_list(&self) -> Option<&TermMap> {
        self.terms.as_ref()
    }

    /// Per-position term ordinals; all `None` until the collector runs
    pub fn token_list(&self) -> &[Option<TermId>] {
        &self.tokens
    }

    pub fn token(&self, position: Position) -> Option<TermId> {
        self.tokens.get(position).copied().flatten()
    }
}
