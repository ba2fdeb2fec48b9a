//! End-to-end synthesis tests
//!
//! Drives the full responder path with scripted classifiers so every
//! category, the degradation paths, and the determinism guarantees are
//! covered without loading any model.

use async_trait::async_trait;
use solace_classifiers::Classifier;
use solace_core::{ClassifierResult, Error, Result};
use solace_engine::{
    CrisisLexicon, ResponseCategory, ResponseEngine, Responder, SynthesisResult, TemplateBank,
    DISCLAIMER, GREETING,
};
use std::sync::Arc;

/// Classifier that always returns a fixed result
struct FixedClassifier {
    name: String,
    label: String,
    score: f32,
}

impl FixedClassifier {
    fn arc(name: &str, label: &str, score: f32) -> Arc<dyn Classifier> {
        Arc::new(Self {
            name: name.to_string(),
            label: label.to_string(),
            score,
        })
    }
}

#[async_trait]
impl Classifier for FixedClassifier {
    async fn classify(&self, _text: &str) -> Result<ClassifierResult> {
        Ok(ClassifierResult::new(self.label.clone(), self.score))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Classifier that always fails, for the degradation paths
struct FailingClassifier {
    name: String,
}

impl FailingClassifier {
    fn arc(name: &str) -> Arc<dyn Classifier> {
        Arc::new(Self {
            name: name.to_string(),
        })
    }
}

#[async_trait]
impl Classifier for FailingClassifier {
    async fn classify(&self, _text: &str) -> Result<ClassifierResult> {
        Err(Error::classifier("simulated classifier failure"))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn responder(sentiment: (&str, f32), emotion: (&str, f32)) -> Responder {
    Responder::new(
        FixedClassifier::arc("sentiment-fixed", sentiment.0, sentiment.1),
        FixedClassifier::arc("emotion-fixed", emotion.0, emotion.1),
        ResponseEngine::with_defaults().unwrap(),
    )
}

#[tokio::test]
async fn test_crisis_dominates_positive_signals() {
    let responder = responder(("POSITIVE", 0.99), ("joy", 0.99));
    let result = responder
        .respond("Honestly great week, but some days I want to end my life")
        .await;

    assert!(result.crisis);
    assert_eq!(result.category, ResponseCategory::Crisis);
    assert!(result.reply.contains("988"));
    assert_eq!(result.tip, None);
    assert!(result.summary().ends_with("possible crisis language detected"));
}

#[tokio::test]
async fn test_crisis_with_negative_signals() {
    let responder = responder(("NEGATIVE", 0.99), ("sadness", 0.8));
    let result = responder.respond("I can't go on anymore").await;

    assert!(result.crisis);
    assert_eq!(result.reply, responder.engine().bank().crisis_message());
    assert_eq!(result.tip, None);
}

#[tokio::test]
async fn test_strong_negative_threshold_is_inclusive() {
    let text = "nothing is going right";

    let at = responder(("NEGATIVE", 0.7), ("neutral", 0.5));
    let result = at.respond(text).await;
    assert_eq!(result.category, ResponseCategory::NegativeStrong);

    let below = responder(("NEGATIVE", 0.69), ("neutral", 0.5));
    let result = below.respond(text).await;
    assert_eq!(result.category, ResponseCategory::NegativeMild);
}

#[tokio::test]
async fn test_emotion_sub_categories() {
    let cases = [
        ("sadness", ResponseCategory::Sadness),
        ("anger", ResponseCategory::Anger),
        ("fear", ResponseCategory::Fear),
        ("disgust", ResponseCategory::Disgust),
    ];

    for (emotion, expected) in cases {
        let responder = responder(("NEUTRAL", 0.5), (emotion, 0.8));
        let result = responder.respond("it's been a lot lately").await;

        assert_eq!(result.category, expected, "emotion: {emotion}");
        let variants = responder.engine().bank().templates_for(expected);
        assert!(variants.contains(&result.reply));
        assert!(result.tip.is_some(), "emotion: {emotion}");
    }
}

#[tokio::test]
async fn test_joy_and_neutral_have_no_tip() {
    let joyful = responder(("POSITIVE", 0.95), ("joy", 0.9));
    let result = joyful.respond("I got the job!").await;
    assert!(!result.crisis);
    assert_eq!(result.category, ResponseCategory::Joy);
    let joy_variants = joyful.engine().bank().templates_for(ResponseCategory::Joy);
    assert!(joy_variants.contains(&result.reply));
    assert_eq!(result.tip, None);

    let neutral = responder(("NEUTRAL", 0.5), ("neutral", 0.5));
    let result = neutral.respond("just checking in").await;
    assert_eq!(result.category, ResponseCategory::Neutral);
    assert_eq!(result.tip, None);
}

#[tokio::test]
async fn test_same_message_always_gets_same_reply() {
    let text = "I keep replaying the argument in my head";

    let mut replies = Vec::new();
    for _ in 0..3 {
        // Fresh responder each round: determinism must not depend on
        // instance state.
        let responder = responder(("NEGATIVE", 0.6), ("sadness", 0.8));
        for _ in 0..3 {
            let result = responder.respond(text).await;
            replies.push((result.reply, result.tip));
        }
    }

    let (first_reply, first_tip) = replies[0].clone();
    for (reply, tip) in &replies {
        assert_eq!(reply, &first_reply);
        assert_eq!(tip, &first_tip);
    }
}

#[tokio::test]
async fn test_varying_text_reaches_all_variants_and_tips() {
    let responder = responder(("NEUTRAL", 0.5), ("sadness", 0.8));

    let mut replies = std::collections::HashSet::new();
    let mut tips = std::collections::HashSet::new();
    for i in 0..64 {
        let result = responder.respond(&format!("rough day number {i}")).await;
        replies.insert(result.reply);
        if let Some(tip) = result.tip {
            tips.insert(tip);
        }
    }

    let bank = TemplateBank::new();
    assert_eq!(
        replies.len(),
        bank.templates_for(ResponseCategory::Sadness).len()
    );
    assert_eq!(tips.len(), bank.tips().len());
}

#[tokio::test]
async fn test_failed_sentiment_classifier_degrades_to_neutral() {
    init_tracing();

    let responder = Responder::new(
        FailingClassifier::arc("sentiment-broken"),
        FixedClassifier::arc("emotion-fixed", "sadness", 0.8),
        ResponseEngine::with_defaults().unwrap(),
    );

    let result = responder.respond("everything fell apart today").await;

    // Sentiment degraded to neutral; the emotion signal still routes.
    assert_eq!(result.sentiment_label, "NEUTRAL");
    assert_eq!(result.sentiment_score, 0.5);
    assert_eq!(result.category, ResponseCategory::Sadness);
}

#[tokio::test]
async fn test_both_classifiers_failing_still_replies() {
    init_tracing();

    let responder = Responder::new(
        FailingClassifier::arc("sentiment-broken"),
        FailingClassifier::arc("emotion-broken"),
        ResponseEngine::with_defaults().unwrap(),
    );

    let result = responder.respond("long day, nothing special").await;
    assert_eq!(result.category, ResponseCategory::Neutral);
    assert!(!result.reply.is_empty());

    // The crisis scan runs on the raw text, so it survives total
    // classifier loss.
    let result = responder.respond("I just can't go on").await;
    assert_eq!(result.category, ResponseCategory::Crisis);
    assert!(result.crisis);
}

#[tokio::test]
async fn test_bundled_classifiers_end_to_end() {
    let responder = Responder::with_defaults().unwrap();

    let result = responder.respond("I can't go on anymore").await;
    assert_eq!(result.category, ResponseCategory::Crisis);
    assert_eq!(result.tip, None);

    let result = responder
        .respond("everything is awful and I'm exhausted")
        .await;
    assert_eq!(result.category, ResponseCategory::NegativeStrong);
    assert_eq!(result.sentiment_label, "NEGATIVE");

    let result = responder.respond("tears in my eyes all day").await;
    assert_eq!(result.category, ResponseCategory::Sadness);
    assert_eq!(result.emotion_label, "sadness");

    let result = responder.respond("I'm so happy today").await;
    assert_eq!(result.category, ResponseCategory::Joy);

    let result = responder.respond("the weather is cloudy").await;
    assert_eq!(result.category, ResponseCategory::Neutral);
}

#[tokio::test]
async fn test_custom_lexicon_and_templates() {
    let lexicon = CrisisLexicon::with_phrases(vec!["completely numb".to_string()]).unwrap();
    let mut bank = TemplateBank::new();
    bank.set_templates(
        ResponseCategory::Neutral,
        vec!["Here with you.".to_string()],
    )
    .unwrap();

    let responder = Responder::new(
        FixedClassifier::arc("sentiment-fixed", "NEUTRAL", 0.5),
        FixedClassifier::arc("emotion-fixed", "neutral", 0.5),
        ResponseEngine::new(lexicon, bank),
    );

    let result = responder.respond("I feel completely numb").await;
    assert_eq!(result.category, ResponseCategory::Crisis);

    let result = responder.respond("an ordinary morning").await;
    assert_eq!(result.reply, "Here with you.");
}

#[tokio::test]
async fn test_result_serializes_for_api_layers() {
    let responder = responder(("NEGATIVE", 0.6), ("fear", 0.77));
    let result = responder.respond("I'm worried about tomorrow").await;

    let json = serde_json::to_string(&result).unwrap();
    let back: SynthesisResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
    assert!(json.contains(r#""category":"fear""#));

    assert!(!GREETING.is_empty());
    assert!(!DISCLAIMER.is_empty());
}
