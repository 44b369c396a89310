//! All AI/LLM functionality

pub mod classify;
pub mod client;

// Re-export main types for convenience
pub use classify::{ErrorClassification, classify_message, classify_provider_error};
pub use client::{GeminiClient, GenerationProvider};
