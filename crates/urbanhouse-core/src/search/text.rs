//! Accent- and case-insensitive text comparison.

use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks block (U+0300–U+036F).
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Lower-cases `s` and strips diacritics.
///
/// The text is decomposed to NFD so accented letters split into a base
/// letter and a combining mark, then the marks are dropped. `"López"`,
/// `"lopez"` and `"LOPEZ"` all normalise to `"lopez"`.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .collect()
}

/// Returns `true` if `needle` occurs in `haystack` after normalising both.
///
/// `needle` is expected to be normalised already so callers can reuse it
/// across many haystacks.
pub fn contains_normalized(haystack: &str, normalized_needle: &str) -> bool {
    normalize(haystack).contains(normalized_needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accents_and_case_are_ignored() {
        assert_eq!(normalize("López"), normalize("lopez"));
        assert_eq!(normalize("lopez"), normalize("LOPEZ"));
        assert_eq!(normalize("López"), "lopez");
    }

    #[test]
    fn strips_every_latin_diacritic() {
        assert_eq!(normalize("Ático Ñandú Pingüino"), "atico nandu pinguino");
    }

    #[test]
    fn precomposed_and_decomposed_input_agree() {
        let composed = "Bel\u{00E9}n";
        let decomposed = "Bele\u{0301}n";
        assert_eq!(normalize(composed), normalize(decomposed));
    }

    #[test]
    fn empty_string() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn non_latin_text_passes_through() {
        assert_eq!(normalize("m² | 2 baños"), "m² | 2 banos");
    }

    #[test]
    fn contains_normalized_matches_substring() {
        let needle = normalize("VICENTE LOP");
        assert!(contains_normalized("Vicente López, GBA", &needle));
        assert!(!contains_normalized("Belgrano, Buenos Aires", &needle));
    }
}
