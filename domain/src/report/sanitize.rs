//! Text sanitizer for the report.
//!
//! The report uses the standard PDF fonts, which only cover a single-byte
//! encoding. Text is decomposed (NFKD) and everything outside ASCII is
//! dropped: accented letters keep their base letter, emoji disappear.

use unicode_normalization::UnicodeNormalization;

/// Closest plain-ASCII rendition of `text`.
///
/// Idempotent, and the identity on ASCII input.
pub fn sanitize(text: &str) -> String {
    if text.is_ascii() {
        return text.to_string();
    }
    text.nfkd().filter(char::is_ascii).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_is_unchanged() {
        let text = "Plain ASCII: 100% {ok} ~ \"quoted\"\nnext line\t tab";
        assert_eq!(sanitize(text), text);
    }

    #[test]
    fn test_accents_degrade_to_base_letter() {
        assert_eq!(sanitize("Café résumé naïve"), "Cafe resume naive");
        assert_eq!(sanitize("Ångström"), "Angstrom");
    }

    #[test]
    fn test_compatibility_forms_decompose() {
        // ligature and fullwidth forms have ASCII compatibility decompositions
        assert_eq!(sanitize("ﬁne"), "fine");
        assert_eq!(sanitize("ＡＢＣ"), "ABC");
    }

    #[test]
    fn test_symbols_and_emoji_are_dropped() {
        assert_eq!(sanitize("Great job 🎉!"), "Great job !");
        assert_eq!(sanitize("✅ Feedback received"), " Feedback received");
        assert_eq!(sanitize("日本語"), "");
    }

    #[test]
    fn test_typographic_quotes_are_dropped() {
        assert_eq!(sanitize("you’ve"), "youve");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "ASCII only",
            "Crème brûlée — “fancy” quotes…",
            "🤖 AI Interview Coach",
            "Zürich, São Paulo, Kraków",
            "ﬀ ﬃ ½ ²",
        ];
        for sample in samples {
            let once = sanitize(sample);
            assert_eq!(sanitize(&once), once, "not idempotent for {:?}", sample);
            assert!(once.is_ascii());
        }
    }
}
