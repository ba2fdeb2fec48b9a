//! Crisis language detection
//!
//! A small high-recall lexicon scanned with case-insensitive substring
//! matching. A phrase hit anywhere in the text flags the whole message,
//! including hits inside longer words.

use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use solace_core::{Error, Result};
use std::path::Path;

/// Built-in crisis phrases
const DEFAULT_PHRASES: &[&str] = &[
    "suicide",
    "kill myself",
    "end my life",
    "can't go on",
    "cant go on",
    "self harm",
    "self-harm",
    "hurt myself",
    "harm myself",
    "ending it",
    "no reason to live",
];

/// On-disk shape of a lexicon file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LexiconSpec {
    /// Crisis phrases
    phrases: Vec<String>,
}

/// Case-insensitive substring scanner for crisis language
pub struct CrisisLexicon {
    phrases: Vec<String>,
    matcher: AhoCorasick,
}

impl CrisisLexicon {
    /// Create a lexicon with the built-in phrase list
    pub fn new() -> Result<Self> {
        Self::with_phrases(DEFAULT_PHRASES.iter().map(|p| p.to_string()).collect())
    }

    /// Create a lexicon from a custom phrase list
    pub fn with_phrases(phrases: Vec<String>) -> Result<Self> {
        if phrases.is_empty() {
            return Err(Error::lexicon("phrase list is empty"));
        }

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&phrases)
            .map_err(|e| Error::lexicon(format!("Failed to build crisis matcher: {e}")))?;

        Ok(Self { phrases, matcher })
    }

    /// Load a lexicon from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let spec: LexiconSpec = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse lexicon: {e}")))?;
        Self::with_phrases(spec.phrases)
    }

    /// Load a lexicon from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Check whether the text contains any crisis phrase
    pub fn detect(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }

    /// The first matching phrase in the text, if any
    pub fn first_match(&self, text: &str) -> Option<&str> {
        self.matcher
            .find(text)
            .map(|m| self.phrases[m.pattern().as_usize()].as_str())
    }

    /// Configured phrases
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }
}
