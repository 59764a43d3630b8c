/// Normalize player input for a lookup: trim surrounding whitespace and lowercase
pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Clean a raw list entry: drop every double quote, then trim
pub fn sanitize_entry(raw: &str) -> String {
    raw.replace('"', "").trim().to_owned()
}

/// Count alphabetic characters, ignoring digits, punctuation and whitespace
pub fn count_letters(word: &str) -> usize {
    word.chars().filter(|ch| ch.is_alphabetic()).count()
}

/// Take the first `len` characters of `word` (the whole word if it is shorter)
pub fn char_prefix(word: &str, len: usize) -> &str {
    match word.char_indices().nth(len) {
        Some((idx, _)) => &word[..idx],
        None => word,
    }
}
