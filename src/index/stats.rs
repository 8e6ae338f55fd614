use crate::index::Streeng;
use serde::Serialize;

/// Snapshot of an index's shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexStats {
    pub word_count: usize,
    /// Distinct words, known once terms have been collected
    pub distinct_terms: Option<usize>,
    pub depth: usize,
    pub node_count: usize,
    pub reverse_node_count: Option<usize>,
    pub density: f64,
}

impl IndexStats {
    pub fn from_index(streeng: &Streeng) -> Self {
        Self {
            word_count: streeng.len(),
            distinct_terms: streeng.term_list().map(|terms| terms.len()),
            depth: streeng.depth(),
            node_count: streeng.node_count(),
            reverse_node_count: streeng.reverse_node_count(),
            density: streeng.density(),
        }
    }
}

impl Streeng {
    pub fn stats(&self) -> IndexStats {
        IndexStats::from_index(self)
    }
}

/// Display index statistics
pub fn show_stats(stats: &IndexStats) {
    println!("Index Statistics");
    println!("================");
    println!();
    println!("Words:            {}", stats.word_count);
    match stats.distinct_terms {
        Some(n) => println!("Distinct terms:   {}", n),
        None => println!("Distinct terms:   (not collected)"),
    }
    println!("Depth:            {}", stats.depth);
    println!("Forward nodes:    {}", stats.node_count);
    match stats.reverse_node_count {
        Some(n) => println!("Reverse nodes:    {}", n),
        None => println!("Reverse nodes:    (not built)"),
    }
    println!("Density:          {:.4}", stats.density);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_snapshot() {
        let mut s = Streeng::new(["a", "a", "b"]);
        let before = s.stats();
        assert_eq!(before.distinct_terms, None);
        assert_eq!(before.node_count, 3);
        assert_eq!(before.density, 1.0);

        s.terms();
        s.build_reverse();
        let after = s.stats();
        assert_eq!(after.distinct_terms, Some(2));
        assert_eq!(after.reverse_node_count, Some(2));
    }

    #[test]
    fn test_stats_serialize() {
        let s = Streeng::new(["ab"]);
        let json = serde_json::to_value(s.stats()).unwrap();
        assert_eq!(json["word_count"], 1);
        assert_eq!(json["depth"], 2);
        assert!(json["reverse_node_count"].is_null());
    }
}
