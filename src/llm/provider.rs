use anyhow::Result;
use async_trait::async_trait;

/// The single outbound call the assistant depends on: given a text prompt,
/// eventually return generated text or fail.
///
/// Implemented by `GeminiClient` for the real service and by deterministic
/// stubs in tests.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}
