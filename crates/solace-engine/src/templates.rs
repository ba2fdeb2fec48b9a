//! Reply template bank
//!
//! Static, hand-written reply variants per category, plus the self-care
//! tips attached to negative replies. Nothing here is generated at
//! runtime; every string ships with the binary and went through content
//! review before landing.

use crate::category::ResponseCategory;
use solace_core::{Error, Result};
use std::collections::HashMap;

/// Opening message shown before the first user turn
pub const GREETING: &str = "Hi, I'm here to listen. What's on your mind today?";

/// Standing disclaimer for any surface embedding the engine
pub const DISCLAIMER: &str =
    "Supportive, sentiment-aware responses. Not a substitute for professional help.";

const CRISIS_MESSAGE: &str = "I'm really sorry you're feeling this way. Your life matters and you deserve support. \
     If you're in immediate danger, please call your local emergency number (e.g., 112/911/999).\n\n\
     You can reach a crisis line right now:\n\
     - International: https://findahelpline.com/\n\
     - India: AASRA +91-9820466726 | https://aasra.info/\n\
     - US: 988 Suicide & Crisis Lifeline (call/text 988) | https://988lifeline.org/\n\n\
     I'm here to listen. Would you like to tell me a little more about what's on your mind?";

/// Reply variants and tips for every response category
pub struct TemplateBank {
    crisis_message: String,
    variants: HashMap<ResponseCategory, Vec<String>>,
    tips: Vec<String>,
}

impl TemplateBank {
    /// Bank with the built-in replies
    pub fn new() -> Self {
        let mut variants = HashMap::new();

        variants.insert(
            ResponseCategory::NegativeStrong,
            vec![
                "That sounds really tough, and it's completely okay to feel this way. \
                 You don't have to handle everything at once. Maybe try a small grounding step: \
                 take 3 slow breaths (in 4s, hold 4s, out 6s). If you'd like, we can break the \
                 situation into smaller parts together. What part feels heaviest right now?"
                    .to_string(),
            ],
        );
        variants.insert(
            ResponseCategory::NegativeMild,
            vec![
                "I hear some heaviness in what you shared. You're not alone. What would feel \
                 most supportive for you right now: venting, problem-solving, or a simple check-in?"
                    .to_string(),
            ],
        );
        variants.insert(
            ResponseCategory::Sadness,
            vec![
                "It sounds really heavy. It's okay to feel sad. A tiny step like writing down \
                 one worry or taking a 2-minute stretch can help. What feels smallest to try?"
                    .to_string(),
                "I'm hearing a lot of weight in this. You deserve gentleness right now. Could a \
                 short break with some music or a warm drink help even 1%?"
                    .to_string(),
            ],
        );
        variants.insert(
            ResponseCategory::Anger,
            vec![
                "That anger makes sense if things feel unfair. Want to try a 10-second pause \
                 (inhale 4, hold 4, exhale 6), then we can sort what's in your control?"
                    .to_string(),
                "Your feelings are valid. We can channel this energy. Would listing the top 1-2 \
                 triggers help us plan a next step?"
                    .to_string(),
            ],
        );
        variants.insert(
            ResponseCategory::Fear,
            vec![
                "When worry spikes, your body is trying to protect you. Let's ground: name 5 \
                 things you see, 4 you feel, 3 you hear. I'm with you."
                    .to_string(),
                "Anxiety can feel loud. Let's shrink the moment: what's the next tiny action \
                 (30 seconds or less) you could take?"
                    .to_string(),
            ],
        );
        variants.insert(
            ResponseCategory::Disgust,
            vec![
                "Feeling turned off or disappointed can be protective. If you zoom out, is \
                 there a boundary you'd like to set to feel safer?"
                    .to_string(),
                "It's okay to step back from what doesn't feel right. What would a kinder \
                 environment look like for you today?"
                    .to_string(),
            ],
        );
        variants.insert(
            ResponseCategory::Joy,
            vec![
                "I love the hopeful energy here. What helped you get to this point today? \
                 Let's note a small win to carry forward."
                    .to_string(),
                "That spark matters. What would help you keep this momentum for the next hour?"
                    .to_string(),
            ],
        );
        variants.insert(
            ResponseCategory::Neutral,
            vec![
                "Thanks for sharing. I'm here with you. What's one small action that could make \
                 the next hour a bit easier?"
                    .to_string(),
                "I'm listening. If you'd like, we can choose between venting, problem-solving, \
                 or a simple check-in."
                    .to_string(),
            ],
        );

        let tips = vec![
            "Mini reset: inhale 4, hold 4, exhale 6.".to_string(),
            "Micro-action: sip water and roll your shoulders.".to_string(),
            "Grounding: name 5 things you can see right now.".to_string(),
            "30-second pause: look out a window or step away from the screen.".to_string(),
        ];

        Self {
            crisis_message: CRISIS_MESSAGE.to_string(),
            variants,
            tips,
        }
    }

    /// Reply variants for a category. The crisis category always has
    /// exactly one variant.
    pub fn templates_for(&self, category: ResponseCategory) -> &[String] {
        if category == ResponseCategory::Crisis {
            std::slice::from_ref(&self.crisis_message)
        } else {
            self.variants
                .get(&category)
                .map(Vec::as_slice)
                .unwrap_or(&[])
        }
    }

    /// The fixed crisis reply
    pub fn crisis_message(&self) -> &str {
        &self.crisis_message
    }

    /// Self-care tips attached to negative replies
    pub fn tips(&self) -> &[String] {
        &self.tips
    }

    /// Replace the variants for a category.
    ///
    /// The crisis reply cannot be changed through this path; use
    /// [`Self::set_crisis_message`].
    pub fn set_templates(
        &mut self,
        category: ResponseCategory,
        templates: Vec<String>,
    ) -> Result<()> {
        if category == ResponseCategory::Crisis {
            return Err(Error::template(
                "crisis reply is fixed; use set_crisis_message",
            ));
        }
        if templates.is_empty() {
            return Err(Error::template(format!(
                "no reply variants given for category {}",
                category.label()
            )));
        }

        self.variants.insert(category, templates);
        Ok(())
    }

    /// Replace the fixed crisis reply
    pub fn set_crisis_message(&mut self, message: impl Into<String>) -> Result<()> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(Error::template("crisis message is empty"));
        }

        self.crisis_message = message;
        Ok(())
    }

    /// Replace the self-care tips
    pub fn set_tips(&mut self, tips: Vec<String>) -> Result<()> {
        if tips.is_empty() {
            return Err(Error::template("tip list is empty"));
        }

        self.tips = tips;
        Ok(())
    }
}

impl Default for TemplateBank {
    fn default() -> Self {
        Self::new()
    }
}
