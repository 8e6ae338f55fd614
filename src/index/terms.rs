use crate::index::types::{TermId, TermMap};
use crate::index::Streeng;
use tracing::debug;

impl Streeng {
    /// Collect term frequencies and tokenize the corpus.
    ///
    /// One sequential pass over the forward trie. Each terminal vertex is a
    /// distinct word: it gets the next ordinal (starting at 1), every
    /// position under it is tokenized to that ordinal, and its
    /// representative word is recorded with its occurrence count.
    pub fn terms(&mut self) -> &TermMap {
        let mut terms = TermMap::default();
        let mut tokens: Vec<Option<TermId>> = vec![None; self.words.len()];
        let mut ordinal: TermId = 1;

        for node in self.root.terminals() {
            let Some(first) = node.representative() else {
                continue;
            };
            for &position in node.positions() {
                tokens[position] = Some(ordinal);
            }
            terms.insert(self.words[first].clone(), node.num_positions());
            ordinal += 1;
        }

        debug!(distinct = terms.len(), "collected terms");

        self.tokens = tokens;
        self.terms.insert(terms)
    }

    /// Terms occurring at least `min` times.
    ///
    /// `None` if [`Streeng::terms`] has not run. A minimum of 0 returns the
    /// whole mapping.
    pub fn find_freq_terms(&self, min: usize) -> Option<TermMap> {
        let terms = self.terms.as_ref()?;
        if min == 0 {
            return Some(terms.clone());
        }
        Some(
            terms
                .iter()
                .filter(|&(_, &count)| count >= min)
                .map(|(term, &count)| (term.clone(), count))
                .collect(),
        )
    }

    /// Terms sorted by descending frequency, ties broken alphabetically
    pub fn ranked_terms(&self, min: usize) -> Option<Vec<(String, usize)>> {
        let mut ranked: Vec<(String, usize)> = self.find_freq_terms(min)?.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Some(ranked)
    }
}
