use crate::index::types::{Direction, Position};
use crate::index::{Node, Streeng};

/// Runs exact, prefix, suffix and membership queries against an index.
pub struct QueryExecutor<'a> {
    index: &'a Streeng,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(index: &'a Streeng) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &'a Streeng {
        self.index
    }

    /// Walk from `root` consuming `word` in `direction`.
    /// Empty words never reach a vertex.
    fn walk(root: &'a Node, word: &str, direction: Direction) -> Option<&'a Node> {
        if word.is_empty() {
            return None;
        }
        root.descend_word(word, direction)
    }

    /// Positions of corpus words equal to `word`, in corpus order
    pub fn search(&self, word: &str) -> &'a [Position] {
        Self::walk(&self.index.root, word, Direction::Forward)
            .map(Node::positions)
            .unwrap_or(&[])
    }

    /// Positions of corpus words starting with `prefix`, in no particular order
    pub fn start_with(&self, prefix: &str) -> Vec<Position> {
        Self::walk(&self.index.root, prefix, Direction::Forward)
            .map(subtree_positions)
            .unwrap_or_default()
    }

    /// Positions of corpus words ending with `suffix`, in no particular order.
    ///
    /// Always empty until the reverse trie has been built.
    pub fn end_with(&self, suffix: &str) -> Vec<Position> {
        self.index
            .reverse_root
            .as_ref()
            .and_then(|root| Self::walk(root, suffix, Direction::Reverse))
            .map(subtree_positions)
            .unwrap_or_default()
    }

    /// True if some corpus word equals `word`
    pub fn contains(&self, word: &str) -> bool {
        Self::walk(&self.index.root, word, Direction::Forward)
            .is_some_and(Node::is_terminal)
    }
}

fn subtree_positions(node: &Node) -> Vec<Position> {
    let mut positions = Vec::new();
    node.collect_positions(&mut positions);
    positions
}

impl Streeng {
    /// See [`QueryExecutor::search`]
    pub fn search(&self, word: &str) -> &[Position] {
        QueryExecutor::new(self).search(word)
    }

    /// See [`QueryExecutor::start_with`]
    pub fn start_with(&self, prefix: &str) -> Vec<Position> {
        QueryExecutor::new(self).start_with(prefix)
    }

    /// See [`QueryExecutor::end_with`]
    pub fn end_with(&self, suffix: &str) -> Vec<Position> {
        QueryExecutor::new(self).end_with(suffix)
    }

    /// See [`QueryExecutor::contains`]
    pub fn contains(&self, word: &str) -> bool {
        QueryExecutor::new(self).contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut v: Vec<Position>) -> Vec<Position> {
        v.sort_unstable();
        v
    }

    fn sample() -> Streeng {
        Streeng::new(["cat", "car", "cats", "dog"])
    }

    #[test]
    fn test_search() {
        let s = sample();
        assert_eq!(s.search("cat"), &[0]);
        assert!(s.search("ca").is_empty());
        assert!(s.search("cow").is_empty());
        assert!(s.search("").is_empty());
    }

    #[test]
    fn test_search_keeps_corpus_order() {
        let s = Streeng::new(["a", "b", "a", "a"]);
        assert_eq!(s.search("a"), &[0, 2, 3]);
    }

    #[test]
    fn test_start_with() {
        let s = sample();
        assert_eq!(sorted(s.start_with("ca")), vec![0, 1, 2]);
        assert_eq!(sorted(s.start_with("cat")), vec![0, 2]);
        assert_eq!(s.start_with("dog"), vec![3]);
        assert!(s.start_with("").is_empty());
        assert!(s.start_with("x").is_empty());
    }

    #[test]
    fn test_start_with_no_duplicates() {
        let s = Streeng::new(["ab", "ab", "abc"]);
        assert_eq!(sorted(s.start_with("ab")), vec![0, 1, 2]);
    }

    #[test]
    fn test_end_with_requires_reverse() {
        let mut s = sample();
        assert!(s.end_with("t").is_empty());
        s.build_reverse();
        assert_eq!(sorted(s.end_with("t")), vec![0]);
        assert_eq!(sorted(s.end_with("ts")), vec![2]);
        assert_eq!(sorted(s.end_with("at")), vec![0]);
        assert_eq!(sorted(s.end_with("g")), vec![3]);
        assert!(s.end_with("").is_empty());
        assert!(s.end_with("zz").is_empty());
    }

    #[test]
    fn test_end_with_shared_suffix() {
        let mut s = Streeng::new(["cat", "hat", "cats", "at"]);
        s.build_reverse();
        assert_eq!(sorted(s.end_with("at")), vec![0, 1, 3]);
    }

    #[test]
    fn test_contains() {
        let s = sample();
        assert!(s.contains("cat"));
        assert!(s.contains("cats"));
        assert!(!s.contains("ca"));
        assert!(!s.contains("catsup"));
        assert!(!s.contains(""));
    }

    #[test]
    fn test_multibyte_queries() {
        let mut s = Streeng::new(["naïve", "naïveté", "café"]);
        s.build_reverse();
        assert_eq!(s.search("naïve"), &[0]);
        assert_eq!(sorted(s.start_with("naï")), vec![0, 1]);
        assert_eq!(sorted(s.end_with("é")), vec![1, 2]);
        assert_eq!(sorted(s.end_with("fé")), vec![2]);
    }
}
