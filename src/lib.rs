//! Decides whether sentences are syntactically well-formed.
//!
//! Two [NGramModel]s are trained, one on grammatical text and one on
//! ungrammatical text. A sentence is judged good when the first model gives
//! it a higher score than the second.
//!
//! ```no_run
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use syntax_decider::{Decider, ModelConfig};
//!
//! # async fn demo() -> Result<(), syntax_decider::error::Error> {
//! let mut decider = Decider::from_corpus_files(
//!     "good.txt",
//!     "bad.txt",
//!     ModelConfig::default(),
//!     StdRng::from_entropy(),
//! )
//! .await?;
//! println!("{}", decider.decide("The cat sat on the mat."));
//! # Ok(())
//! # }
//! ```
pub mod decider;
pub mod error;
pub mod model;
pub mod ngram;
pub mod normalize;
pub mod vocabulary;

pub use decider::{Decider, Verdict};
pub use model::{ModelConfig, NGramModel};
