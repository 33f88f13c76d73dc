//! Normalizer Module Tests
//!
//! Validates the tokenization contract shared by ingestion and queries.
//!
//! ## Test Scopes
//! - **normalize**: Lower-casing, stripping, splitting and empty-token handling.
//! - **normalize_key**: Single-word lookup form.
//! - **Properties**: Idempotence under re-tokenization and determinism.

#[cfg(test)]
mod tests {
    use crate::normalizer::tokenizer::{normalize, normalize_key};

    // ============================================================
    // TOKENIZER TESTS - normalize
    // ============================================================

    #[test]
    fn test_normalize_basic_sentence() {
        let tokens = normalize("the Cat sat on the MAT.");

        assert_eq!(tokens, vec!["the", "cat", "sat", "on", "the", "mat"]);
    }

    #[test]
    fn test_normalize_keeps_duplicates_and_order() {
        let tokens = normalize("rust rust programming rust");

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens.iter().filter(|t| *t == "rust").count(), 3);
        assert_eq!(tokens[2], "programming");
    }

    #[test]
    fn test_normalize_strips_digits_and_punctuation() {
        let tokens = normalize("Rust 2024, Programming! 123");

        // "2024," and "123" vanish entirely instead of becoming empty tokens
        assert_eq!(tokens, vec!["rust", "programming"]);
    }

    #[test]
    fn test_normalize_joins_across_removed_characters() {
        // Removing a character does not introduce a split
        let tokens = normalize("don't e-mail x2y");

        assert_eq!(tokens, vec!["dont", "email", "xy"]);
    }

    #[test]
    fn test_normalize_removes_non_ascii_letters() {
        let tokens = normalize("café naïve Ñandú");

        assert_eq!(tokens, vec!["caf", "nave", "and"]);
    }

    #[test]
    fn test_normalize_tabs_and_newlines_are_stripped_not_split() {
        // Only spaces separate tokens; tabs and newlines are removed like punctuation
        let tokens = normalize("hello\tworld\nagain  there");

        assert_eq!(tokens, vec!["helloworldagain", "there"]);
    }

    #[test]
    fn test_normalize_empty_string() {
        assert!(normalize("").is_empty());
    }

    #[test]
    fn test_normalize_no_letters() {
        assert!(normalize("123 !!! 456 ??").is_empty());
        assert!(normalize("     ").is_empty());
    }

    // ============================================================
    // TOKENIZER TESTS - normalize_key
    // ============================================================

    #[test]
    fn test_normalize_key_single_word() {
        assert_eq!(normalize_key("Hello!"), "hello");
        assert_eq!(normalize_key("MAT."), "mat");
    }

    #[test]
    fn test_normalize_key_does_not_split() {
        assert_eq!(normalize_key("New York"), "new york");
    }

    #[test]
    fn test_normalize_key_can_be_empty() {
        assert_eq!(normalize_key("42"), "");
    }

    #[test]
    fn test_equivalent_words_share_a_key() {
        let forms = ["Cat", "CAT", "cat!", "c4at", "\"cat\""];

        for form in forms {
            assert_eq!(normalize_key(form), "cat", "{:?} should normalize to cat", form);
        }
    }

    // ============================================================
    // PROPERTIES
    // ============================================================

    #[test]
    fn test_normalize_is_idempotent_under_retokenization() {
        let samples = [
            "the Cat sat on the MAT.",
            "  multiple   spaces  ",
            "Mixed-Case, punctuation; and 1234 digits",
            "ünïcödé and ASCII",
            "",
        ];

        for sample in samples {
            let first = normalize(sample);
            let second = normalize(&first.join(" "));
            assert_eq!(first, second, "re-tokenizing {:?} changed the result", sample);
        }
    }

    #[test]
    fn test_normalize_key_is_idempotent() {
        for word in ["Hello", "wOrLd!!", "a b c", "9lives"] {
            let once = normalize_key(word);
            assert_eq!(normalize_key(&once), once);
        }
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let text = "Some Text, with 42 things!";

        assert_eq!(normalize(text), normalize(text));
    }
}
