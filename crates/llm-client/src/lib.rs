//! Language-model client for the NDA redline pipeline
//!
//! Provides a trait-based seam over chat-completion endpoints:
//! - `OpenAiCompatibleClient`: any OpenAI-compatible API (Ollama, vLLM, ...)
//! - `MockModel`: scripted responses for testing
//!
//! plus the fixed prompt templates and defensive parsing of model output
//! into the analysis/validation schemas.

pub mod client;
pub mod error;
pub mod mock;
pub mod parse;
pub mod prompts;
pub mod schema;

pub use client::{CompletionRequest, LanguageModel, OpenAiCompatibleClient};
pub use error::LlmError;
pub use mock::MockModel;
pub use parse::{parse_analysis, parse_validation};
pub use schema::{ClauseAnalysis, ClauseSuggestion, ValidationResult};
