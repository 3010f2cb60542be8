//! Text normalization: raw text to sentences of tokens.
use lazy_static::lazy_static;
use regex::Regex;

/// Start-of-sentence marker.
pub const START: &str = "<start>";
/// End-of-sentence marker.
pub const END: &str = "<end>";
/// Replaces every run of digits.
pub const NUMBER: &str = "<num>";

// Upper case never survives lowercasing, so this cannot collide with text.
const SENTENCE_BREAK: &str = "END";

lazy_static! {
    static ref TERMINATOR_PATTERN: Regex = Regex::new(r"[.?!]\s*").unwrap();
    static ref HYPHEN_PATTERN: Regex = Regex::new(r"-+").unwrap();
    static ref DIGITS_PATTERN: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// A sentence is its tokens, wrapped in [START] and [END].
pub type Sentence = Vec<String>;

/// Splits `text` into sentences of lowercase tokens.
///
/// Sentences end at `.`, `?` or `!`. Hyphen runs become spaces, other ASCII
/// punctuation is dropped and digit runs become [NUMBER]. Every segment
/// between terminators yields a sentence, even an empty one, so the result
/// is never empty.
pub fn normalize(text: &str) -> Vec<Sentence> {
    let text = text
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let text = TERMINATOR_PATTERN.replace_all(&text, SENTENCE_BREAK);
    let text = HYPHEN_PATTERN.replace_all(&text, " ");
    let text: String = text.chars().filter(|c| !c.is_ascii_punctuation()).collect();
    let text = DIGITS_PATTERN.replace_all(&text, NUMBER);

    text.trim()
        .split(SENTENCE_BREAK)
        .map(|segment| {
            std::iter::once(START)
                .chain(segment.split_whitespace())
                .chain(std::iter::once(END))
                .map(str::to_string)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(tokens: &[&str]) -> Sentence {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn splits_on_terminators() {
        let sentences = normalize("The cat sat.  Did it?Yes!");
        assert_eq!(
            sentences,
            vec![
                sentence(&[START, "the", "cat", "sat", END]),
                sentence(&[START, "did", "it", END]),
                sentence(&[START, "yes", END]),
                sentence(&[START, END]),
            ]
        );
    }

    #[test]
    fn strips_punctuation_and_hyphens() {
        let sentences = normalize("well-known, \"quoted\" (words) -- ok");
        assert_eq!(
            sentences,
            vec![sentence(&[START, "well", "known", "quoted", "words", "ok", END])]
        );
    }

    #[test]
    fn replaces_numbers() {
        let sentences = normalize("In 1984 there were 3,000 of them");
        assert_eq!(
            sentences,
            vec![sentence(&[
                START, "in", "<num>", "there", "were", "<num>", "of", "them", END
            ])]
        );
    }

    #[test]
    fn empty_text_is_degenerate_sentence() {
        assert_eq!(normalize(""), vec![sentence(&[START, END])]);
        assert_eq!(normalize("   \n\t"), vec![sentence(&[START, END])]);
    }

    #[test]
    fn markers_in_text_are_stripped() {
        // angle brackets are punctuation, so text can't forge a marker
        let sentences = normalize("<start> __ <end>");
        assert_eq!(sentences, vec![sentence(&[START, "start", "end", END])]);
    }

    #[test]
    fn is_repeatable() {
        let text = "One line. Another line with 42 things!";
        assert_eq!(normalize(text), normalize(text));
    }
}
