/// Split text into words on runs of Unicode whitespace.
/// Never yields empty words.
pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Borrowing variant of [`split_words`]
pub fn split_words_ref(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
