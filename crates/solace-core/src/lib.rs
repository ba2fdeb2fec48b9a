//! Solace Core
//!
//! Shared types and error handling for the Solace supportive-response
//! workspace.
//!
//! This crate provides:
//! - The `ClassifierResult` vocabulary exchanged with external classifiers
//! - Error types and result handling used across the workspace

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::ClassifierResult;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::ClassifierResult;
}
