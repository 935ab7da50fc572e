//! Safety library - workplace-safety Q&A and HIRARC risk assessment.
//!
//! This crate provides:
//! - Keyword predicates over lower-cased text (`keywords`)
//! - Canned-answer resolution for safety questions (`answer`)
//! - Hazard identification and risk scoring for scenarios (`risk`)
//! - FAQ knowledge base and sample inputs (`knowledge`)
//! - Delayed replies and chat transcripts (`assistant`)
//! - User settings (`config`)
//!
//! Feature flags:
//! - `cli`: Command-line interface

// Core modules (always compiled)
pub mod answer;
pub mod assistant;
pub mod config;
pub mod error;
pub mod keywords;
pub mod knowledge;
pub mod risk;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types
pub use answer::resolve;
pub use error::AppError;
pub use risk::{classify, ClassificationResult, RiskLevel};
