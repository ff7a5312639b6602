//! Text normalization and word counting.

/// Collapses every run of whitespace (spaces, tabs, newlines) to a single
/// space and strips leading/trailing whitespace.
///
/// Pure and idempotent: `normalize_whitespace(normalize_whitespace(s))`
/// equals `normalize_whitespace(s)` for all inputs.
#[must_use]
pub fn normalize_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Counts whitespace-separated tokens. An empty or all-whitespace string
/// yields 0.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_runs() {
        assert_eq!(normalize_whitespace("a  b\t\tc\n\nd"), "a b c d");
    }

    #[test]
    fn test_normalize_trims_ends() {
        assert_eq!(normalize_whitespace("  hello world \n"), "hello world");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace(" \t\n "), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        let inputs = ["", "  a  b  ", "x", "\tmulti\nline\r\ntext  "];
        for input in inputs {
            let once = normalize_whitespace(input);
            assert_eq!(normalize_whitespace(&once), once);
        }
    }

    #[test]
    fn test_normalized_has_no_double_whitespace() {
        let out = normalize_whitespace("a \t b\n\n\nc    d");
        assert!(!out.contains("  "));
        assert_eq!(out, out.trim());
    }

    #[test]
    fn test_count_words_empty() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
    }

    #[test]
    fn test_count_words_extra_whitespace() {
        assert_eq!(count_words("a b  c"), 3);
        assert_eq!(count_words("  one\ttwo\nthree  "), 3);
    }
}
