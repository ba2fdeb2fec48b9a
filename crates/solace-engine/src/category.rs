//! Response category resolution
//!
//! Collapses the sentiment signal, the emotion signal, and the crisis flag
//! into one closed category with a strict priority order. Safety outranks
//! everything: a crisis match wins no matter how positive the classifiers
//! read the text.

use serde::{Deserialize, Serialize};
use solace_core::ClassifierResult;
use std::fmt;

/// Sentiment score at or above this counts as strongly negative
pub const STRONG_NEGATIVE_THRESHOLD: f32 = 0.7;

/// Closed set of response categories, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseCategory {
    /// Crisis language detected in the raw text
    Crisis,
    /// Negative sentiment at or above the strong threshold
    NegativeStrong,
    /// Negative signal without a usable emotion sub-class
    NegativeMild,
    Sadness,
    Anger,
    Fear,
    Disgust,
    Joy,
    Neutral,
}

impl ResponseCategory {
    /// All categories, highest priority first
    pub const ALL: [ResponseCategory; 9] = [
        Self::Crisis,
        Self::NegativeStrong,
        Self::NegativeMild,
        Self::Sadness,
        Self::Anger,
        Self::Fear,
        Self::Disgust,
        Self::Joy,
        Self::Neutral,
    ];

    /// Resolve the category for one message.
    ///
    /// The checks run in priority order and the first hit wins:
    /// 1. Crisis flag
    /// 2. Strong negative sentiment (threshold is inclusive)
    /// 3. Negative sentiment or a negative emotion class; the emotion
    ///    sub-category when it names one, otherwise [`Self::NegativeMild`]
    /// 4. Positive sentiment or joy
    /// 5. Neutral
    ///
    /// Labels are compared case-insensitively. Scores are clamped first,
    /// so a non-finite sentiment score never reads as strongly negative.
    pub fn resolve(
        sentiment: &ClassifierResult,
        emotion: &ClassifierResult,
        crisis: bool,
    ) -> Self {
        if crisis {
            return Self::Crisis;
        }

        let negative = sentiment.label.eq_ignore_ascii_case("NEGATIVE");
        if negative && sentiment.clamped_score() >= STRONG_NEGATIVE_THRESHOLD {
            return Self::NegativeStrong;
        }

        let emotion_label = emotion.label.to_ascii_lowercase();
        let sub_category = Self::from_negative_emotion(&emotion_label);
        if negative || sub_category.is_some() {
            return sub_category.unwrap_or(Self::NegativeMild);
        }

        if sentiment.label.eq_ignore_ascii_case("POSITIVE") || emotion_label == "joy" {
            return Self::Joy;
        }

        Self::Neutral
    }

    fn from_negative_emotion(label: &str) -> Option<Self> {
        match label {
            "sadness" => Some(Self::Sadness),
            "anger" => Some(Self::Anger),
            "fear" => Some(Self::Fear),
            "disgust" => Some(Self::Disgust),
            _ => None,
        }
    }

    /// Stable lowercase label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Crisis => "crisis",
            Self::NegativeStrong => "negative_strong",
            Self::NegativeMild => "negative_mild",
            Self::Sadness => "sadness",
            Self::Anger => "anger",
            Self::Fear => "fear",
            Self::Disgust => "disgust",
            Self::Joy => "joy",
            Self::Neutral => "neutral",
        }
    }

    /// Whether this category reflects a negative signal
    pub fn is_negative(&self) -> bool {
        !matches!(self, Self::Joy | Self::Neutral)
    }

    /// Whether replies in this category carry a self-care tip.
    ///
    /// Crisis is excluded even though it reads as negative: the crisis
    /// reply always goes out unaccompanied.
    pub fn needs_tip(&self) -> bool {
        self.is_negative() && !matches!(self, Self::Crisis)
    }
}

impl fmt::Display for ResponseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
