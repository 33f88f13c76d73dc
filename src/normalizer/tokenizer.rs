use regex::Regex;
use std::sync::LazyLock;

static STRIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z ]").unwrap());

/// Lower-cases `text` and removes everything that is not an ASCII letter or a space.
fn clean_text(text: &str) -> String {
    STRIP_RE.replace_all(&text.to_lowercase(), "").into_owned()
}

/// Splits raw text into normalized tokens.
pub fn normalize(text: &str) -> Vec<String> {
    clean_text(text)
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| word.to_string())
        .collect()
}

/// Single-word form used for lookups. Does not split, so a multi-word key keeps its spaces.
pub fn normalize_key(word: &str) -> String {
    clean_text(word)
}
