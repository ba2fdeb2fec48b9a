//! Solace Engine
//!
//! Deterministic response synthesis for supportive chat.
//!
//! For every user message the engine:
//! 1. Scans the raw text against the crisis lexicon
//! 2. Resolves a response category from the sentiment signal, the emotion
//!    signal, and the crisis flag, in strict priority order
//! 3. Selects one reply variant for that category by stable content hash
//! 4. Attaches a self-care tip to non-crisis negative replies
//!
//! Synthesis is pure: no IO, no randomness, no shared mutable state. The
//! same message with the same classifier outputs always yields the same
//! reply, which keeps the safety-critical paths testable end to end.

pub mod category;
pub mod crisis;
pub mod engine;
pub mod responder;
pub mod selector;
pub mod templates;

pub use category::{ResponseCategory, STRONG_NEGATIVE_THRESHOLD};
pub use crisis::CrisisLexicon;
pub use engine::{ResponseEngine, SynthesisResult};
pub use responder::Responder;
pub use selector::{select, stable_hash};
pub use templates::{TemplateBank, DISCLAIMER, GREETING};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::category::{ResponseCategory, STRONG_NEGATIVE_THRESHOLD};
    pub use crate::crisis::CrisisLexicon;
    pub use crate::engine::{ResponseEngine, SynthesisResult};
    pub use crate::responder::Responder;
    pub use crate::templates::TemplateBank;
}
