use crate::index::node::Node;
use crate::index::types::{Direction, Position};

/// Result of building one trie over a corpus
#[derive(Debug)]
pub struct BuiltTrie {
    pub root: Node,
    /// Vertices created below the root
    pub created: usize,
    /// Longest word, in characters
    pub depth: usize,
}

/// Inserts corpus words into a trie, one character at a time.
pub struct TrieBuilder {
    direction: Direction,
    root: Node,
    created: usize,
    depth: usize,
}

impl TrieBuilder {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            root: Node::root(),
            created: 0,
            depth: 0,
        }
    }

    /// Insert `word` as corpus position `position`.
    ///
    /// Identical words share one terminal vertex, which accumulates all of
    /// their positions. Empty words create nothing.
    pub fn insert(&mut self, position: Position, word: &str) {
        match self.direction {
            Direction::Forward => self.insert_chars(position, word.chars()),
            Direction::Reverse => self.insert_chars(position, word.chars().rev()),
        }
    }

    fn insert_chars<I>(&mut self, position: Position, chars: I)
    where
        I: Iterator<Item = char>,
    {
        let mut node = &mut self.root;
        let mut len = 0;
        for ch in chars {
            let (child, created) = node.child_or_insert(ch);
            if created {
                self.created += 1;
            }
            node = child;
            len += 1;
        }
        if len == 0 {
            return;
        }
        node.push_position(position);
        self.depth = self.depth.max(len);
    }

    pub fn finish(self) -> BuiltTrie {
        BuiltTrie {
            root: self.root,
            created: self.created,
            depth: self.depth,
        }
    }
}

/// Build a trie over `words` in the given direction
pub fn build_trie<S: AsRef<str>>(words: &[S], direction: Direction) -> BuiltTrie {
    let mut builder = TrieBuilder::new(direction);
    for (position, word) in words.iter().enumerate() {
        builder.insert(position, word.as_ref());
    }
    builder.finish()
}
