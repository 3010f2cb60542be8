//! Fixed-length n-gram counting over a reduced token stream.
use std::collections::HashMap;

use crate::normalize::{END, START};

/// Occurrence counts of the n-grams of a token stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NGramCounts {
    order: usize,
    counts: HashMap<Vec<String>, usize>,
}

impl NGramCounts {
    /// Counts every window of `order` tokens in `tokens`.
    ///
    /// Windows holding both sentence markers span a sentence boundary and are
    /// dropped, unless they are exactly one whole sentence (starting with
    /// [START] and ending with [END]).
    pub fn count(tokens: &[String], order: usize) -> Self {
        let mut counts: HashMap<Vec<String>, usize> = HashMap::new();
        if order == 0 {
            return NGramCounts { order, counts };
        }

        for window in tokens.windows(order).filter(|w| is_retained(w)) {
            match counts.get_mut(window) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(window.to_vec(), 1);
                }
            }
        }

        NGramCounts { order, counts }
    }

    /// Count of `ngram`, 0 when it was never retained.
    pub fn get(&self, ngram: &[String]) -> usize {
        self.counts.get(ngram).copied().unwrap_or(0)
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of distinct n-grams.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[String], usize)> {
        self.counts.iter().map(|(ngram, count)| (ngram.as_slice(), *count))
    }
}

fn is_retained(window: &[String]) -> bool {
    let has_start = window.iter().any(|t| t == START);
    let has_end = window.iter().any(|t| t == END);
    if !(has_start && has_end) {
        return true;
    }
    window.first().map(String::as_str) == Some(START)
        && window.last().map(String::as_str) == Some(END)
}
