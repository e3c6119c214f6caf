use crate::llm::prompt::{PromptBuilder, TaskKind};
use crate::llm::provider::TextGenerator;
use log::debug;
use serde::Serialize;
use std::sync::Arc;

/// Results of running all three analysis tasks over one piece of code.
///
/// Field values are the model's answers, or the same error text a single
/// task would have returned; a failed sub-task never aborts the others.
#[derive(Debug, Serialize)]
pub struct CodeAnalysis {
    pub explanation: String,
    pub improvements: String,
    pub debug_suggestions: String,
}

/// The assistant proper: builds a prompt per task, sends it to the generator
/// and relays the answer.
///
/// Every task reports network and service failures as ordinary response text
/// of the form "An error occurred while <task>: <cause>" instead of
/// returning a `Result`. Callers tell success from failure by content only;
/// the interactive shell prints both the same way.
pub struct CodeAssistant {
    generator: Arc<dyn TextGenerator>,
}

impl CodeAssistant {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Explain what the code does.
    pub async fn explain(&self, code: &str) -> String {
        self.run_task(TaskKind::Explain, code, None).await
    }

    /// Suggest efficiency, readability, and best-practice improvements.
    pub async fn suggest_improvements(&self, code: &str) -> String {
        self.run_task(TaskKind::Improve, code, None).await
    }

    /// Look for bugs, optionally guided by an observed error message.
    pub async fn debug(&self, code: &str, error_message: Option<&str>) -> String {
        self.run_task(TaskKind::Debug, code, error_message).await
    }

    /// Run all three tasks over the same code.
    ///
    /// The tasks are independent requests joined before returning; each one
    /// carries its own failure boundary, so a failed sub-task shows up as
    /// error text under its own key while the others complete normally. The
    /// debug task runs without an error message here, matching the
    /// single-task default.
    pub async fn analyze(&self, code: &str) -> CodeAnalysis {
        let (explanation, improvements, debug_suggestions) = tokio::join!(
            self.explain(code),
            self.suggest_improvements(code),
            self.debug(code, None),
        );

        CodeAnalysis {
            explanation,
            improvements,
            debug_suggestions,
        }
    }

    async fn run_task(&self, kind: TaskKind, code: &str, error_message: Option<&str>) -> String {
        let prompt = PromptBuilder::build(kind, code, error_message);
        debug!("Running {} task ({} byte prompt)", kind, prompt.len());

        match self.generator.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => format!("An error occurred while {}: {:#}", kind.failure_phrase(), e),
        }
    }
}
