//! Provider Module
//!
//! The completion endpoint the orchestrator calls. The endpoint is opaque:
//! it may be slow, may fail, and may return text with no JSON in it.

mod gemini;
pub mod prompts;

use async_trait::async_trait;

use crate::error::Result;

pub use gemini::GeminiClient;

/// Text and image-understanding completion endpoint.
///
/// Implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Completes a text prompt.
    ///
    /// # Returns
    /// * `Ok(String)` - Free-form model output
    /// * `Err(OrchestratorError::RemoteCall)` - Transport, quota or request failure
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Completes a prompt about an attached image.
    async fn complete_with_image(&self, prompt: &str, image: &[u8], mime_type: &str)
        -> Result<String>;
}
