//! Text-generation provider abstraction.
//!
//! The service talks to its generation backend through the [`TextProvider`]
//! trait so the Gemini implementation can be swapped for a mock in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations. Failures are surfaced to callers as
/// opaque messages; no finer classification is attempted.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Trait for text generation providers (e.g., Gemini).
///
/// The single authenticated instance is built at startup and shared
/// read-only across handlers for the process lifetime.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a text response for the given prompt. Blocks (at the task
    /// level) until the provider responds or errors; no streaming.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
