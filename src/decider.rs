//! Good-versus-bad sentence classification.
use std::fmt;
use std::path::Path;

use log::{debug, info};
use rand::Rng;
use tokio::fs::File as AsyncFile;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};

use crate::error::Error;
use crate::model::{ModelConfig, NGramModel};

/// Outcome for one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Good,
    Bad,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Good => write!(f, "1"),
            Verdict::Bad => write!(f, "0"),
        }
    }
}

/// Compares the scores of a model trained on well-formed text and one
/// trained on ill-formed text. Ties are broken with `rng`.
pub struct Decider<R> {
    good: NGramModel,
    bad: NGramModel,
    rng: R,
}

impl<R: Rng> Decider<R> {
    pub fn new(good: NGramModel, bad: NGramModel, rng: R) -> Self {
        Decider { good, bad, rng }
    }

    /// Trains both models from their corpus files, concurrently.
    pub async fn from_corpus_files<P>(
        good_path: P,
        bad_path: P,
        config: ModelConfig,
        rng: R,
    ) -> Result<Self, Error>
    where
        P: AsRef<Path> + Send + Sync + 'static,
    {
        let good_task = tokio::spawn(async move { NGramModel::from_file(good_path, config).await });
        let bad_task = tokio::spawn(async move { NGramModel::from_file(bad_path, config).await });

        let (good, bad) = tokio::try_join!(good_task, bad_task)?;
        Ok(Decider::new(good?, bad?, rng))
    }

    /// Scores of `line` under the good and the bad model.
    pub fn scores(&self, line: &str) -> (f64, f64) {
        (self.good.check_sentence(line), self.bad.check_sentence(line))
    }

    pub fn decide(&mut self, line: &str) -> Verdict {
        let (good, bad) = self.scores(line);
        if good > bad {
            Verdict::Good
        } else if good < bad {
            Verdict::Bad
        } else {
            debug!("tie at {good:e} for {:?}, deciding randomly", line.trim_end());
            if self.rng.gen_bool(0.5) {
                Verdict::Good
            } else {
                Verdict::Bad
            }
        }
    }

    /// Writes one verdict per line of `input` to `output`, truncating it.
    /// Returns the number of lines processed.
    pub async fn run<P, Q>(&mut self, input: P, output: Q) -> Result<usize, Error>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let start_time = std::time::Instant::now();
        let reader = BufReader::new(AsyncFile::open(input.as_ref()).await?);
        let mut writer = BufWriter::new(AsyncFile::create(output.as_ref()).await?);
        let mut lines = reader.lines();

        let mut processed = 0;
        while let Some(line) = lines.next_line().await? {
            let verdict = self.decide(&line);
            debug!("line {}: {}", processed + 1, verdict);
            writer.write_all(format!("{verdict}\n").as_bytes()).await?;
            processed += 1;
        }
        writer.flush().await?;

        info!(
            "Decided {} lines from {} in {} ms",
            processed,
            input.as_ref().display(),
            start_time.elapsed().as_millis()
        );
        Ok(processed)
    }

    pub fn good(&self) -> &NGramModel {
        &self.good
    }

    pub fn bad(&self) -> &NGramModel {
        &self.bad
    }
}
