//! Response synthesis
//!
//! Pure fusion of the classifier outputs, the crisis scan, and the
//! template bank. No IO and no randomness: the same inputs always
//! produce the same [`SynthesisResult`].

use crate::category::ResponseCategory;
use crate::crisis::CrisisLexicon;
use crate::selector;
use crate::templates::TemplateBank;
use serde::{Deserialize, Serialize};
use solace_core::{ClassifierResult, Result};
use tracing::{debug, warn};

/// Everything synthesized for one user message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisResult {
    /// Sentiment label, uppercased
    pub sentiment_label: String,

    /// Sentiment confidence, clamped to 0.0-1.0
    pub sentiment_score: f32,

    /// Emotion label, lowercased
    pub emotion_label: String,

    /// Emotion confidence, clamped to 0.0-1.0
    pub emotion_score: f32,

    /// Resolved response category
    pub category: ResponseCategory,

    /// Whether crisis language was detected in the raw text
    pub crisis: bool,

    /// The selected reply
    pub reply: String,

    /// Self-care tip, present on non-crisis negative replies
    pub tip: Option<String>,
}

impl SynthesisResult {
    /// One-line summary of the analysis, suitable for a caption or log line
    pub fn summary(&self) -> String {
        let mut meta = format!(
            "Sentiment: {} ({:.2}) | Emotion: {} ({:.2})",
            self.sentiment_label, self.sentiment_score, self.emotion_label, self.emotion_score
        );
        if self.crisis {
            meta.push_str(" | possible crisis language detected");
        }
        meta
    }
}

/// Synthesizes a supportive reply from classifier outputs
pub struct ResponseEngine {
    lexicon: CrisisLexicon,
    bank: TemplateBank,
}

impl ResponseEngine {
    /// Create an engine from a lexicon and a template bank
    pub fn new(lexicon: CrisisLexicon, bank: TemplateBank) -> Self {
        Self { lexicon, bank }
    }

    /// Engine with the built-in lexicon and templates
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(CrisisLexicon::new()?, TemplateBank::new()))
    }

    /// The crisis lexicon in use
    pub fn lexicon(&self) -> &CrisisLexicon {
        &self.lexicon
    }

    /// The template bank in use
    pub fn bank(&self) -> &TemplateBank {
        &self.bank
    }

    /// Mutable access to the template bank, for reply overrides
    pub fn bank_mut(&mut self) -> &mut TemplateBank {
        &mut self.bank
    }

    /// Synthesize the reply for one user message.
    ///
    /// The crisis scan runs on the raw text, never on classifier output,
    /// so a mislabeled message still gets the crisis reply.
    pub fn synthesize(
        &self,
        text: &str,
        sentiment: &ClassifierResult,
        emotion: &ClassifierResult,
    ) -> SynthesisResult {
        let crisis = self.lexicon.detect(text);
        if crisis {
            if let Some(phrase) = self.lexicon.first_match(text) {
                warn!(phrase = %phrase, "crisis language detected");
            }
        }

        let category = ResponseCategory::resolve(sentiment, emotion, crisis);
        debug!(category = %category, crisis, "resolved response category");

        let reply = if category == ResponseCategory::Crisis {
            // The crisis reply is fixed; it never goes through selection.
            self.bank.crisis_message().to_string()
        } else {
            // A validated bank never yields an empty variant list; if one
            // ever does, fail toward the crisis reply rather than silence.
            selector::select(text, self.bank.templates_for(category))
                .unwrap_or_else(|| self.bank.crisis_message())
                .to_string()
        };

        let tip = if category.needs_tip() {
            selector::select(text, self.bank.tips()).map(str::to_string)
        } else {
            None
        };
        debug!(category = %category, tip = tip.is_some(), "selected reply variant");

        SynthesisResult {
            sentiment_label: sentiment.label.to_ascii_uppercase(),
            sentiment_score: sentiment.clamped_score(),
            emotion_label: emotion.label.to_ascii_lowercase(),
            emotion_score: emotion.clamped_score(),
            category,
            crisis,
            reply,
            tip,
        }
    }
}
