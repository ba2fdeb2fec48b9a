//! Core types for Solace

use serde::{Deserialize, Serialize};

/// Output of an external classifier: a label and its confidence.
///
/// Two of these flow into the engine for every user message: one from a
/// binary sentiment model (conventionally `POSITIVE`/`NEGATIVE`) and one
/// from a multi-class emotion model (`sadness`, `anger`, `joy`, ...).
/// Labels are free-form strings; anything unrecognized degrades to the
/// neutral path downstream rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierResult {
    /// Classification label
    #[serde(default = "default_label")]
    pub label: String,

    /// Confidence score (0.0-1.0)
    #[serde(default = "default_score")]
    pub score: f32,
}

impl ClassifierResult {
    /// Create a new classifier result
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }

    /// Stand-in used when an upstream classifier is unavailable or fails
    pub fn neutral() -> Self {
        Self::new("neutral", 0.5)
    }

    /// Score normalized into `[0.0, 1.0]`; non-finite values become 0.5
    pub fn clamped_score(&self) -> f32 {
        if self.score.is_finite() {
            self.score.clamp(0.0, 1.0)
        } else {
            0.5
        }
    }
}

impl Default for ClassifierResult {
    fn default() -> Self {
        Self::neutral()
    }
}

fn default_label() -> String {
    "neutral".to_string()
}

fn default_score() -> f32 {
    0.5
}
