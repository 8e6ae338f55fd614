#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use streeng::Streeng;

#[derive(Arbitrary, Debug)]
struct Input {
    words: Vec<String>,
    query: String,
}

fuzz_target!(|input: Input| {
    // Every query must agree with a scan of the corpus
    let mut index = Streeng::new(input.words.iter().cloned());
    index.build_reverse();
    let q = input.query.as_str();

    let scan = |pred: &dyn Fn(&str) -> bool| -> Vec<usize> {
        if q.is_empty() {
            return Vec::new();
        }
        (0..input.words.len()).filter(|&i| pred(&input.words[i])).collect()
    };

    assert_eq!(index.search(q), &scan(&|w| w == q)[..]);

    let mut prefixed = index.start_with(q);
    prefixed.sort_unstable();
    assert_eq!(prefixed, scan(&|w| w.starts_with(q)));

    let mut suffixed = index.end_with(q);
    suffixed.sort_unstable();
    assert_eq!(suffixed, scan(&|w| w.ends_with(q)));

    assert_eq!(index.contains(q), !index.search(q).is_empty());

    index.terms();
    for (i, w) in input.words.iter().enumerate() {
        assert_eq!(index.token(i).is_some(), !w.is_empty());
    }
});
