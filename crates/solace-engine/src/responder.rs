//! End-to-end responder
//!
//! Ties a sentiment classifier, an emotion classifier, and the response
//! engine together behind one async call. This is the seam a chat surface
//! plugs into.

use crate::engine::{ResponseEngine, SynthesisResult};
use solace_classifiers::{Classifier, LexiconEmotionClassifier, LexiconSentimentClassifier};
use solace_core::{ClassifierResult, Result};
use std::sync::Arc;
use tracing::warn;

pub struct Responder {
    sentiment: Arc<dyn Classifier>,
    emotion: Arc<dyn Classifier>,
    engine: ResponseEngine,
}

impl Responder {
    /// Create a responder from two classifiers and an engine
    pub fn new(
        sentiment: Arc<dyn Classifier>,
        emotion: Arc<dyn Classifier>,
        engine: ResponseEngine,
    ) -> Self {
        Self {
            sentiment,
            emotion,
            engine,
        }
    }

    /// Responder backed by the bundled lexicon classifiers and the
    /// built-in templates
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(
            Arc::new(LexiconSentimentClassifier::new()?),
            Arc::new(LexiconEmotionClassifier::new()?),
            ResponseEngine::with_defaults()?,
        ))
    }

    /// The engine in use
    pub fn engine(&self) -> &ResponseEngine {
        &self.engine
    }

    /// Mutable access to the engine, for template overrides
    pub fn engine_mut(&mut self) -> &mut ResponseEngine {
        &mut self.engine
    }

    /// Classify the message and synthesize the reply.
    ///
    /// A classifier failure degrades that signal to neutral instead of
    /// failing the response; the user always gets a reply.
    pub async fn respond(&self, text: &str) -> SynthesisResult {
        let (sentiment, emotion) =
            futures::join!(self.sentiment.classify(text), self.emotion.classify(text));

        let sentiment = sentiment.unwrap_or_else(|e| {
            warn!(
                classifier = self.sentiment.name(),
                error = %e,
                "sentiment classifier failed, using neutral"
            );
            ClassifierResult::neutral()
        });
        let emotion = emotion.unwrap_or_else(|e| {
            warn!(
                classifier = self.emotion.name(),
                error = %e,
                "emotion classifier failed, using neutral"
            );
            ClassifierResult::neutral()
        });

        self.engine.synthesize(text, &sentiment, &emotion)
    }
}
