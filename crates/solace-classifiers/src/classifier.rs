//! Classifier trait

use async_trait::async_trait;
use solace_core::{ClassifierResult, Result};

/// Trait for all classifiers
///
/// Implementations range from the bundled lexicon fallbacks to adapters
/// around hosted models. The engine only sees this interface, so swapping
/// the backing model never touches response synthesis.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify the given text
    async fn classify(&self, text: &str) -> Result<ClassifierResult>;

    /// Get the classifier name
    fn name(&self) -> &str;
}
