//! Lightweight emotion classifier (lexicon fallback)
//!
//! Mirrors the label set of the usual multi-class emotion models:
//! `sadness`, `anger`, `fear`, `disgust`, `surprise`, `joy`, `neutral`.
//! Labels are lowercase, matching what those models emit.

use crate::classifier::Classifier;
use aho_corasick::AhoCorasick;
use solace_core::{ClassifierResult, Result};

pub struct LexiconEmotionClassifier {
    name: String,
    matchers: Vec<(&'static str, AhoCorasick)>,
}

impl LexiconEmotionClassifier {
    pub fn new() -> Result<Self> {
        Self::with_name("emotion-lexicon")
    }

    pub fn with_name(name: impl Into<String>) -> Result<Self> {
        // Order matters: ties resolve to the earlier class.
        let classes: Vec<(&'static str, Vec<&'static str>)> = vec![
            (
                "sadness",
                vec![
                    "sad",
                    "unhappy",
                    "crying",
                    "cried",
                    "tears",
                    "lonely",
                    "alone",
                    "grief",
                    "empty",
                    "heartbroken",
                    "depressed",
                    "feeling down",
                    "feel down",
                ],
            ),
            (
                "anger",
                vec![
                    "angry",
                    "anger",
                    "mad at",
                    "furious",
                    "rage",
                    "annoyed",
                    "irritated",
                    "unfair",
                    "fed up",
                    "resent",
                ],
            ),
            (
                "fear",
                vec![
                    "afraid",
                    "scared",
                    "anxious",
                    "anxiety",
                    "panic",
                    "worried",
                    "worry",
                    "nervous",
                    "terrified",
                    "dread",
                    "on edge",
                ],
            ),
            (
                "disgust",
                vec![
                    "disgust",
                    "gross",
                    "sick of",
                    "revolting",
                    "repulsed",
                    "can't stand",
                    "cant stand",
                    "makes me sick",
                ],
            ),
            (
                "surprise",
                vec![
                    "surprised",
                    "surprising",
                    "shocked",
                    "unexpected",
                    "can't believe",
                    "cant believe",
                    "out of nowhere",
                    "stunned",
                ],
            ),
            (
                "joy",
                vec![
                    "happy",
                    "joy",
                    "glad",
                    "excited",
                    "thrilled",
                    "delighted",
                    "proud",
                    "grateful",
                    "great news",
                    "wonderful",
                ],
            ),
        ];

        let mut matchers = Vec::with_capacity(classes.len());
        for (emotion, words) in classes {
            let matcher = AhoCorasick::builder()
                .ascii_case_insensitive(true)
                .build(words)
                .map_err(|e| {
                    solace_core::Error::classifier(format!(
                        "Failed to build {emotion} matcher: {e}"
                    ))
                })?;
            matchers.push((emotion, matcher));
        }

        Ok(Self {
            name: name.into(),
            matchers,
        })
    }
}

#[async_trait::async_trait]
impl Classifier for LexiconEmotionClassifier {
    async fn classify(&self, text: &str) -> Result<ClassifierResult> {
        let mut total = 0usize;
        let mut best: Option<(&'static str, usize)> = None;

        for (emotion, matcher) in &self.matchers {
            let hits = matcher.find_iter(text).count();
            total += hits;
            if hits > 0 && best.map_or(true, |(_, best_hits)| hits > best_hits) {
                best = Some((emotion, hits));
            }
        }

        let result = match best {
            Some((emotion, hits)) => ClassifierResult::new(emotion, hits as f32 / total as f32),
            None => ClassifierResult::neutral(),
        };

        Ok(result)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
