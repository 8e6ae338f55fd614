//! Visiting the terminal vertices of a trie.
//!
//! [`Streeng::traverse`] walks the forward trie in pre-order on the calling
//! thread. [`Streeng::par_traverse`] fans out one rayon task per child of the
//! root and returns once every task has finished. Visits from different
//! tasks interleave in no particular order; within a task they stay in
//! pre-order.

use crate::index::node::Node;
use crate::index::Streeng;
use tracing::trace;

impl Streeng {
    /// Pre-order walk of the forward trie, calling `visitor` on every
    /// vertex where at least one word ends.
    pub fn traverse<F>(&self, mut visitor: F)
    where
        F: FnMut(&Node),
    {
        self.root.walk(&mut visitor);
    }

    /// Concurrent walk of the forward trie.
    ///
    /// `visitor` runs on rayon worker threads and must synchronize any
    /// shared state it touches.
    pub fn par_traverse<F>(&self, visitor: F)
    where
        F: Fn(&Node) + Sync,
    {
        par_walk(&self.root, &visitor);
    }

    /// Pre-order walk of the reverse trie. Does nothing if it is not built.
    pub fn traverse_reverse<F>(&self, mut visitor: F)
    where
        F: FnMut(&Node),
    {
        if let Some(root) = &self.reverse_root {
            root.walk(&mut visitor);
        }
    }
}

/// Walk `root` with one scoped task per direct child
pub fn par_walk<F>(root: &Node, visitor: &F)
where
    F: Fn(&Node) + Sync,
{
    if root.is_terminal() {
        visitor(root);
    }

    trace!(tasks = root.num_children(), "fanning out traversal");

    rayon::scope(|scope| {
        for child in root.children() {
            scope.spawn(move |_| {
                for node in child.terminals() {
                    visitor(node);
                }
            });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::types::Position;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_traverse_visits_terminals_only() {
        let s = Streeng::new(["cat", "car", "cats", "dog", "cat"]);
        let mut visited = Vec::new();
        s.traverse(|node| visited.push(node.positions().to_vec()));
        visited.sort();
        assert_eq!(visited, vec![vec![0, 4], vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn test_traverse_preorder_within_branch() {
        let s = Streeng::new(["abc", "ab", "a"]);
        let mut order: Vec<Position> = Vec::new();
        s.traverse(|node| order.push(node.positions()[0]));
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn test_par_traverse_matches_sequential() {
        let words: Vec<String> = (0..500)
            .map(|i| format!("{}{}", (b'a' + (i % 26) as u8) as char, i % 37))
            .collect();
        let s = Streeng::new(words);

        let mut sequential = Vec::new();
        s.traverse(|node| sequential.extend_from_slice(node.positions()));
        sequential.sort_unstable();

        let concurrent = Mutex::new(Vec::new());
        s.par_traverse(|node| {
            concurrent.lock().unwrap().extend_from_slice(node.positions());
        });
        let mut concurrent = concurrent.into_inner().unwrap();
        concurrent.sort_unstable();

        assert_eq!(sequential, concurrent);
        assert_eq!(concurrent.len(), 500);
    }

    #[test]
    fn test_par_traverse_counts_vertices() {
        let s = Streeng::new(["x", "y", "z", "xy", "yz", "zz"]);
        let count = AtomicUsize::new(0);
        s.par_traverse(|_| {
            count.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(count.load(Ordering::Relaxed), 6);
    }

    #[test]
    fn test_traverse_reverse_requires_build() {
        let mut s = Streeng::new(["ab", "cb"]);
        let mut hits = 0;
        s.traverse_reverse(|_| hits += 1);
        assert_eq!(hits, 0);
        s.build_reverse();
        s.traverse_reverse(|_| hits += 1);
        assert_eq!(hits, 2);
    }
}
