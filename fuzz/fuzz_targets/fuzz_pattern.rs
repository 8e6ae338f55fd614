#![no_main]

use libfuzzer_sys::fuzz_target;
use streeng::Streeng;

fuzz_target!(|data: (Vec<String>, String)| {
    // Arbitrary patterns must either fail to compile or run to completion
    let (words, pattern) = data;
    let index = Streeng::new(words);
    if let Ok(mut hits) = index.matches(&pattern) {
        hits.sort_unstable();
        hits.dedup();
        assert!(hits.iter().all(|&p| p < index.len()));
    }
});
