//! Word frequencies and rare-word collapsing.
use std::collections::{HashMap, HashSet};

use num::rational::Ratio;

use crate::normalize::{END, START};

/// Stands in for every word that isn't common.
pub const PLACEHOLDER: &str = "__";

/// Returns true for the tokens that never carry signal on their own.
pub fn is_reserved(token: &str) -> bool {
    token == PLACEHOLDER || token == START || token == END
}

/// Vocabulary learnt from a training token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: HashSet<String>,
    common: HashSet<String>,
    occurrences: HashMap<String, usize>,
    corpus_size: usize,
}

impl Vocabulary {
    /// Counts `tokens` and keeps as common every word occurring at least
    /// `common_ratio * tokens.len()` times.
    ///
    /// Sentence markers are always common.
    pub fn build(tokens: &[String], common_ratio: Ratio<usize>) -> Self {
        let mut occurrences: HashMap<String, usize> = HashMap::new();
        for token in tokens {
            match occurrences.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    occurrences.insert(token.clone(), 1);
                }
            }
        }

        let corpus_size = tokens.len();
        let threshold = Ratio::from_integer(corpus_size) * common_ratio;
        let mut common: HashSet<String> = occurrences
            .iter()
            .filter(|(_, count)| Ratio::from_integer(**count) >= threshold)
            .map(|(word, _)| word.clone())
            .collect();
        common.insert(START.to_string());
        common.insert(END.to_string());

        Vocabulary {
            words: occurrences.keys().cloned().collect(),
            common,
            occurrences,
            corpus_size,
        }
    }

    /// Replaces every word that isn't common with [PLACEHOLDER].
    pub fn reduce(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .map(|token| {
                if self.is_common(token) {
                    token.clone()
                } else {
                    PLACEHOLDER.to_string()
                }
            })
            .collect()
    }

    pub fn is_common(&self, token: &str) -> bool {
        self.common.contains(token)
    }

    /// Distinct tokens seen in training.
    pub fn words(&self) -> &HashSet<String> {
        &self.words
    }

    pub fn common_words(&self) -> &HashSet<String> {
        &self.common
    }

    pub fn occurrences(&self) -> &HashMap<String, usize> {
        &self.occurrences
    }

    pub fn occurrence(&self, token: &str) -> usize {
        self.occurrences.get(token).copied().unwrap_or(0)
    }

    /// Number of training tokens, markers included.
    pub fn corpus_size(&self) -> usize {
        self.corpus_size
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn counts_occurrences() {
        let vocab = Vocabulary::build(&tokens("a b a c a b"), Ratio::new(1, 1600));
        assert_eq!(vocab.occurrence("a"), 3);
        assert_eq!(vocab.occurrence("b"), 2);
        assert_eq!(vocab.occurrence("c"), 1);
        assert_eq!(vocab.occurrence("z"), 0);
        assert_eq!(vocab.corpus_size(), 6);
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn threshold_is_inclusive_and_fractional() {
        // 6 tokens * 1/3 = 2: "b" (2) qualifies, "c" (1) doesn't
        let vocab = Vocabulary::build(&tokens("a b a c a b"), Ratio::new(1, 3));
        assert!(vocab.is_common("a"));
        assert!(vocab.is_common("b"));
        assert!(!vocab.is_common("c"));

        // 6 * 2/5 = 2.4: "b" no longer qualifies
        let vocab = Vocabulary::build(&tokens("a b a c a b"), Ratio::new(2, 5));
        assert!(vocab.is_common("a"));
        assert!(!vocab.is_common("b"));
    }

    #[test]
    fn tiny_corpus_makes_everything_common() {
        let vocab = Vocabulary::build(&tokens("x y z"), Ratio::new(1, 1600));
        assert!(["x", "y", "z"].iter().all(|w| vocab.is_common(w)));
    }

    #[test]
    fn markers_are_always_common() {
        let mut stream = vec![START.to_string()];
        stream.extend(std::iter::repeat("w".to_string()).take(50));
        stream.push(END.to_string());
        let vocab = Vocabulary::build(&stream, Ratio::new(1, 2));
        assert!(vocab.is_common(START));
        assert!(vocab.is_common(END));
        assert!(vocab.is_common("w"));
    }

    #[test]
    fn raising_threshold_never_grows_common_words() {
        let stream = tokens("a a a a b b b c c d e e e e e f");
        let mut previous = usize::MAX;
        for divisor in [1600, 100, 16, 8, 4, 3, 2, 1] {
            let vocab = Vocabulary::build(&stream, Ratio::new(1, divisor));
            let size = vocab.common_words().len();
            assert!(size <= previous, "1/{divisor}: {size} > {previous}");
            previous = size;
        }
    }

    #[test]
    fn reduce_collapses_rare_words() {
        let stream = tokens("<start> a a a b <end>");
        let vocab = Vocabulary::build(&stream, Ratio::new(1, 3));
        assert_eq!(
            vocab.reduce(&tokens("<start> a b unseen <end>")),
            tokens("<start> a __ __ <end>")
        );
    }

    #[test]
    fn reduce_is_idempotent() {
        let stream = tokens("<start> a a a b c <end> <start> a <end>");
        let vocab = Vocabulary::build(&stream, Ratio::new(1, 4));
        let once = vocab.reduce(&stream);
        assert_eq!(vocab.reduce(&once), once);
    }

    #[test]
    fn reserved_tokens() {
        assert!(is_reserved(PLACEHOLDER));
        assert!(is_reserved(START));
        assert!(is_reserved(END));
        assert!(!is_reserved("word"));
    }
}
