//! Solace Classifiers
//!
//! Sentiment and emotion classifiers feeding the Solace response engine.
//!
//! The bundled classifiers are lexicon-based fallbacks: fast, dependency-free
//! stand-ins that emit the same label conventions as the hosted models they
//! substitute for (`POSITIVE`/`NEGATIVE` sentiment, lowercase emotion classes).
//! Adapters for real models implement the same [`Classifier`] trait.
//!
//! All classifiers are designed to run on CPU with minimal overhead.

pub mod classifier;
pub mod emotion;
pub mod sentiment;

pub use classifier::Classifier;
pub use emotion::LexiconEmotionClassifier;
pub use sentiment::LexiconSentimentClassifier;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::Classifier;
    pub use crate::emotion::LexiconEmotionClassifier;
    pub use crate::sentiment::LexiconSentimentClassifier;
}
