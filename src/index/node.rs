use crate::index::types::{Direction, Position};
use ahash::AHashMap;
use std::fmt;

/// A trie vertex keyed by one character.
///
/// `positions` lists, in insertion order, every corpus position whose word
/// ends exactly here; the first entry is the vertex's representative word.
/// Children are owned exclusively by their parent. Dropping a vertex frees
/// its subtree iteratively, so a trie may be as deep as the longest word.
#[derive(Default)]
pub struct Node {
    value: char,
    positions: Vec<Position>,
    children: AHashMap<char, Node>,
}

impl Node {
    pub(crate) fn root() -> Self {
        Self::default()
    }

    fn with_value(value: char) -> Self {
        Self {
            value,
            positions: Vec::new(),
            children: AHashMap::new(),
        }
    }

    /// Character this vertex represents (`'\0'` for a root)
    pub fn value(&self) -> char {
        self.value
    }

    /// Corpus positions terminating at this vertex
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// The `index`-th terminating position, if there is one
    pub fn position(&self, index: usize) -> Option<Position> {
        self.positions.get(index).copied()
    }

    /// First terminating position, the representative word of this vertex
    pub fn representative(&self) -> Option<Position> {
        self.positions.first().copied()
    }

    pub fn num_positions(&self) -> usize {
        self.positions.len()
    }

    /// True if at least one corpus word ends here
    pub fn is_terminal(&self) -> bool {
        !self.positions.is_empty()
    }

    /// Child reached by `ch`
    pub fn child(&self, ch: char) -> Option<&Node> {
        self.children.get(&ch)
    }

    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.values()
    }

    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Follow `chars` from this vertex. `None` if the path breaks.
    pub fn descend<I>(&self, chars: I) -> Option<&Node>
    where
        I: IntoIterator<Item = char>,
    {
        let mut node = self;
        for ch in chars {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    /// Follow the characters of `word` in `direction` from this vertex
    pub fn descend_word(&self, word: &str, direction: Direction) -> Option<&Node> {
        match direction {
            Direction::Forward => self.descend(word.chars()),
            Direction::Reverse => self.descend(word.chars().rev()),
        }
    }

    /// Child for `ch`, created when missing. The flag reports creation.
    pub(crate) fn child_or_insert(&mut self, ch: char) -> (&mut Node, bool) {
        let mut created = false;
        let child = self.children.entry(ch).or_insert_with(|| {
            created = true;
            Node::with_value(ch)
        });
        (child, created)
    }

    pub(crate) fn push_position(&mut self, position: Position) {
        self.positions.push(position);
    }

    /// Lazy pre-order iterator over the terminal vertices of this subtree,
    /// this vertex included.
    pub fn terminals(&self) -> Terminals<'_> {
        Terminals { stack: vec![self] }
    }

    /// Pre-order walk calling `visitor` on every terminal vertex.
    pub fn walk<F>(&self, visitor: &mut F)
    where
        F: FnMut(&Node),
    {
        for node in self.terminals() {
            visitor(node);
        }
    }

    /// Append every position in this subtree to `out`
    pub fn collect_positions(&self, out: &mut Vec<Position>) {
        for node in self.terminals() {
            out.extend_from_slice(&node.positions);
        }
    }

    /// Release the subtree and the positions ending here
    pub(crate) fn clear(&mut self) {
        self.children.clear();
        self.positions.clear();
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        // Every node reaches its own drop with an empty child map
        let mut pending: Vec<Node> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("positions", &self.positions)
            .field("children", &self.children.len())
            .finish()
    }
}

/// Pre-order iterator returned by [`Node::terminals`]
pub struct Terminals<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Terminals<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        while let Some(node) = self.stack.pop() {
            self.stack.extend(node.children.values());
            if node.is_terminal() {
                return Some(node);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert(root: &mut Node, word: &str, position: Position) {
        let mut node = root;
        for ch in word.chars() {
            node = node.child_or_insert(ch).0;
        }
        node.push_position(position);
    }

    #[test]
    fn test_child_or_insert_reports_creation() {
        let mut root = Node::root();
        let (_, created) = root.child_or_insert('a');
        assert!(created);
        let (child, created) = root.child_or_insert('a');
        assert!(!created);
        assert_eq!(child.value(), 'a');
        assert_eq!(root.num_children(), 1);
    }

    #[test]
    fn test_descend() {
        let mut root = Node::root();
        insert(&mut root, "cat", 0);
        assert_eq!(root.descend("cat".chars()).map(|n| n.positions()), Some(&[0][..]));
        assert!(root.descend("ca".chars()).is_some_and(|n| !n.is_terminal()));
        assert!(root.descend("cow".chars()).is_none());
    }

    #[test]
    fn test_terminals_preorder() {
        let mut root = Node::root();
        insert(&mut root, "a", 0);
        insert(&mut root, "ab", 1);
        insert(&mut root, "abc", 2);
        let order: Vec<Position> = root.terminals().map(|n| n.positions()[0]).collect();
        // A single chain has exactly one pre-order
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_terminals_parent_before_children() {
        let mut root = Node::root();
        for (i, word) in ["to", "tea", "ten", "t", "inn", "in", "i"].iter().enumerate() {
            insert(&mut root, word, i);
        }
        let order: Vec<Position> = root.terminals().map(|n| n.positions()[0]).collect();
        assert_eq!(order.len(), 7);
        let at = |p: Position| order.iter().position(|&x| x == p).unwrap();
        assert!(at(3) < at(0) && at(3) < at(1) && at(3) < at(2));
        assert!(at(6) < at(5) && at(5) < at(4));
    }

    #[test]
    fn test_collect_positions_includes_self() {
        let mut root = Node::root();
        insert(&mut root, "car", 0);
        insert(&mut root, "cart", 1);
        insert(&mut root, "car", 2);
        let car = root.descend("car".chars()).unwrap();
        let mut out = Vec::new();
        car.collect_positions(&mut out);
        out.sort_unstable();
        assert_eq!(out, vec![0, 1, 2]);
        assert_eq!(car.representative(), Some(0));
        assert_eq!(car.position(1), Some(2));
        assert_eq!(car.position(5), None);
    }

    #[test]
    fn test_descend_word_directions() {
        let mut root = Node::root();
        insert(&mut root, "olléh", 0);
        assert!(root.descend_word("héllo", Direction::Reverse).is_some_and(Node::is_terminal));
        assert!(root.descend_word("héllo", Direction::Forward).is_none());
        assert!(root.descend_word("oll", Direction::Forward).is_some());
    }

    #[test]
    fn test_clear() {
        let mut root = Node::root();
        insert(&mut root, "deep", 0);
        root.clear();
        assert_eq!(root.num_children(), 0);
        assert_eq!(root.terminals().count(), 0);
    }

    #[test]
    fn test_deep_chain_clear_and_drop() {
        let word = "z".repeat(250_000);
        let mut root = Node::root();
        insert(&mut root, &word, 0);
        insert(&mut root, &word[..1000], 1);
        assert_eq!(root.terminals().count(), 2);
        root.clear();
        assert_eq!(root.num_children(), 0);

        let mut root = Node::root();
        insert(&mut root, &word, 0);
        assert!(format!("{:?}", root).contains("children: 1"));
        drop(root);
    }
}
