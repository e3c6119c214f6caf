pub mod assistant;
pub mod client;
pub mod prompt;
pub mod provider;

pub use assistant::{CodeAnalysis, CodeAssistant};
pub use client::GeminiClient;
pub use provider::TextGenerator;
