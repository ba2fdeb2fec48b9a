//! Lightweight sentiment classifier (lexicon fallback)
//!
//! Used when no external sentiment model is wired in. Emits the same
//! `POSITIVE`/`NEGATIVE` label convention as the usual binary sentiment
//! models so downstream resolution is identical either way.

use crate::classifier::Classifier;
use aho_corasick::AhoCorasick;
use solace_core::{ClassifierResult, Result};

pub struct LexiconSentimentClassifier {
    name: String,
    positive: AhoCorasick,
    negative: AhoCorasick,
}

impl LexiconSentimentClassifier {
    pub fn new() -> Result<Self> {
        Self::with_name("sentiment-lexicon")
    }

    pub fn with_name(name: impl Into<String>) -> Result<Self> {
        let positive = vec![
            "good",
            "great",
            "better",
            "love",
            "happy",
            "glad",
            "grateful",
            "thankful",
            "excited",
            "proud",
            "calm",
            "hopeful",
            "relieved",
            "wonderful",
            "amazing",
        ];
        let negative = vec![
            "bad",
            "sad",
            "awful",
            "terrible",
            "hate",
            "angry",
            "anxious",
            "worried",
            "stressed",
            "tired",
            "lonely",
            "hopeless",
            "scared",
            "hurt",
            "frustrated",
            "overwhelmed",
            "worthless",
            "miserable",
            "exhausted",
        ];

        let positive = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(positive)
            .map_err(|e| {
                solace_core::Error::classifier(format!(
                    "Failed to build positive sentiment matcher: {e}"
                ))
            })?;

        let negative = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(negative)
            .map_err(|e| {
                solace_core::Error::classifier(format!(
                    "Failed to build negative sentiment matcher: {e}"
                ))
            })?;

        Ok(Self {
            name: name.into(),
            positive,
            negative,
        })
    }
}

#[async_trait::async_trait]
impl Classifier for LexiconSentimentClassifier {
    async fn classify(&self, text: &str) -> Result<ClassifierResult> {
        let positive_hits = self.positive.find_iter(text).count() as f32;
        let negative_hits = self.negative.find_iter(text).count() as f32;
        let total = positive_hits + negative_hits;

        // No signal either way reads as neutral, not as a weak positive.
        if total == 0.0 || positive_hits == negative_hits {
            return Ok(ClassifierResult::new("NEUTRAL", 0.5));
        }

        let result = if positive_hits > negative_hits {
            ClassifierResult::new("POSITIVE", positive_hits / total)
        } else {
            ClassifierResult::new("NEGATIVE", negative_hits / total)
        };

        Ok(result)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
