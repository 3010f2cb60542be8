use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::RwLock;

use log::info;
use num::rational::Ratio;

use crate::error::Error;
use crate::ngram::NGramCounts;
use crate::normalize::normalize;
use crate::vocabulary::{is_reserved, Vocabulary};

/// Window length and common-word threshold of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelConfig {
    order: usize,
    common_ratio: Ratio<usize>,
}

impl ModelConfig {
    pub const DEFAULT_ORDER: usize = 6;
    pub const DEFAULT_THRESHOLD_DIVISOR: usize = 1600;

    /// A word is common when it makes up at least `common_ratio` of the
    /// training corpus.
    pub fn new(order: usize, common_ratio: Ratio<usize>) -> Result<Self, Error> {
        if order == 0 {
            return Err(Error::Config("n-gram order must be at least 1".to_string()));
        }
        Ok(ModelConfig {
            order,
            common_ratio,
        })
    }

    /// Same as [ModelConfig::new] with a ratio of `1 / divisor`.
    pub fn with_divisor(order: usize, divisor: usize) -> Result<Self, Error> {
        if divisor == 0 {
            return Err(Error::Config("threshold divisor must be positive".to_string()));
        }
        Self::new(order, Ratio::new(1, divisor))
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn common_ratio(&self) -> Ratio<usize> {
        self.common_ratio
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            order: Self::DEFAULT_ORDER,
            common_ratio: Ratio::new(1, Self::DEFAULT_THRESHOLD_DIVISOR),
        }
    }
}

/// N-gram model trained on a single corpus.
///
/// Scores are products of add-one smoothed n-gram probabilities. They shrink
/// with sentence length and only make sense compared to the score another
/// model gives to the same sentence.
#[derive(Debug)]
pub struct NGramModel {
    config: ModelConfig,
    vocabulary: Vocabulary,
    ngrams: NGramCounts,
    probabilities: RwLock<HashMap<Vec<String>, f64>>,
}

impl NGramModel {
    /// Trains a model on `corpus`.
    pub fn train(config: ModelConfig, corpus: &str) -> NGramModel {
        let tokens: Vec<String> = normalize(corpus).into_iter().flatten().collect();
        let vocabulary = Vocabulary::build(&tokens, config.common_ratio());
        let reduced = vocabulary.reduce(&tokens);
        let ngrams = NGramCounts::count(&reduced, config.order());

        NGramModel {
            config,
            vocabulary,
            ngrams,
            probabilities: RwLock::new(HashMap::new()),
        }
    }

    /// Reads a corpus file and trains a model on it.
    pub async fn from_file<P>(path: P, config: ModelConfig) -> Result<NGramModel, Error>
    where
        P: AsRef<Path>,
    {
        let start_time = std::time::Instant::now();
        info!("Training model from file: {}", path.as_ref().display());

        let corpus = tokio::fs::read_to_string(path.as_ref()).await?;
        let model = NGramModel::train(config, &corpus);

        info!(
            "Trained model from {} in {} ms: {} tokens, {} words ({} common), {} {}-grams",
            path.as_ref().display(),
            start_time.elapsed().as_millis(),
            model.corpus_size(),
            model.vocabulary.len(),
            model.common_words().len(),
            model.ngrams.len(),
            model.order(),
        );
        Ok(model)
    }

    /// `(count(ngram) + 1) / (corpus size + vocabulary size)`.
    ///
    /// Results are cached for the lifetime of the model.
    pub fn conditional_probability(&self, ngram: &[String]) -> f64 {
        debug_assert_eq!(ngram.len(), self.order());
        let cached = self
            .probabilities
            .read()
            .ok()
            .and_then(|cache| cache.get(ngram).copied());
        if let Some(probability) = cached {
            return probability;
        }

        let numerator = (self.ngrams.get(ngram) + 1) as f64;
        let denominator = (self.corpus_size() + self.vocabulary.len()) as f64;
        let probability = numerator / denominator;

        if let Ok(mut cache) = self.probabilities.write() {
            cache.insert(ngram.to_vec(), probability);
        }
        probability
    }

    /// Scores the first sentence of `line`.
    ///
    /// Windows made only of placeholders and markers are skipped, so a
    /// sentence with no full window scores `1.0`.
    pub fn check_sentence(&self, line: &str) -> f64 {
        let sentence = normalize(line).into_iter().next().unwrap_or_default();
        let reduced = self.vocabulary.reduce(&sentence);

        reduced
            .windows(self.order())
            .filter(|window| {
                window
                    .iter()
                    .any(|token| self.vocabulary.is_common(token) && !is_reserved(token))
            })
            .fold(1.0, |score, window| {
                score * self.conditional_probability(window)
            })
    }

    pub fn order(&self) -> usize {
        self.config.order()
    }

    pub fn corpus_size(&self) -> usize {
        self.vocabulary.corpus_size()
    }

    pub fn vocabulary(&self) -> &HashSet<String> {
        self.vocabulary.words()
    }

    pub fn common_words(&self) -> &HashSet<String> {
        self.vocabulary.common_words()
    }

    pub fn occurrences(&self) -> &HashMap<String, usize> {
        self.vocabulary.occurrences()
    }

    pub fn ngram_counts(&self) -> &NGramCounts {
        &self.ngrams
    }

    /// Number of distinct n-grams whose probability is cached.
    pub fn cached_probabilities(&self) -> usize {
        self.probabilities
            .read()
            .map(|cache| cache.len())
            .unwrap_or(0)
    }
}
