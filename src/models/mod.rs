//! Hosted model clients.
//!
//! Provides the REST client for the generation API.

pub mod gemini;

// Re-export commonly used items
pub use gemini::GeminiClient;
