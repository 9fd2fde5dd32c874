//! Canonical form for enumerated fields
//!
//! Callers send `domain`, `readingStage` and `impactScore` in a spaced,
//! human-readable form ("Results Analyzed"); the store holds the same value
//! with all whitespace removed ("ResultsAnalyzed").
//!
//! Whitespace is the ECMAScript `\s` set: Unicode `White_Space` plus U+FEFF,
//! minus U+0085.

/// Whether `c` is dropped by `normalize_enum`
fn is_enum_whitespace(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        _ => c.is_whitespace(),
    }
}

/// Remove every whitespace character, keeping case and order of the rest
pub fn normalize_enum(value: &str) -> String {
    value.chars().filter(|c| !is_enum_whitespace(*c)).collect()
}

/// Split a comma-separated filter parameter and normalize each token
///
/// Tokens that are empty after normalization are kept.
pub fn normalize_enum_list(raw: &str) -> Vec<String> {
    raw.split(',').map(normalize_enum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_internal_whitespace() {
        assert_eq!(normalize_enum("Results Analyzed"), "ResultsAnalyzed");
        assert_eq!(normalize_enum("Abstract Read"), "AbstractRead");
    }

    #[test]
    fn test_strips_every_kind_of_whitespace() {
        assert_eq!(normalize_enum(" Machine\tLearning \n"), "MachineLearning");
        assert_eq!(normalize_enum("Fully\u{00A0}Read"), "FullyRead");
    }

    #[test]
    fn test_byte_order_mark_stripped_next_line_kept() {
        assert_eq!(normalize_enum("\u{FEFF}Physics"), "Physics");
        assert_eq!(normalize_enum("Fully\u{0085}Read"), "Fully\u{0085}Read");
        assert_eq!(normalize_enum("Fully\u{3000}Read\u{2028}"), "FullyRead");
    }

    #[test]
    fn test_preserves_case_and_order() {
        assert_eq!(normalize_enum("high Impact X"), "highImpactX");
    }

    #[test]
    fn test_idempotent() {
        for s in ["Results Analyzed", "FullyRead", "", "  ", "a b  c", "Ünï Cödé"] {
            let once = normalize_enum(s);
            assert_eq!(normalize_enum(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn test_canonical_input_unchanged() {
        assert_eq!(normalize_enum("FullyRead"), "FullyRead");
    }

    #[test]
    fn test_list_splits_and_normalizes() {
        assert_eq!(
            normalize_enum_list("Abstract Read,Fully Read"),
            vec!["AbstractRead", "FullyRead"]
        );
    }

    #[test]
    fn test_list_keeps_empty_tokens() {
        assert_eq!(normalize_enum_list("Physics, ,"), vec!["Physics", "", ""]);
    }
}
