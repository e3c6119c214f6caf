use once_cell::sync::Lazy;
use std::collections::HashMap;
use strum::{Display, EnumIter};

/// The three fixed analysis tasks the assistant knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum TaskKind {
    Explain,
    Improve,
    Debug,
}

impl TaskKind {
    /// Phrase used when a task's request fails and the failure is reported
    /// as ordinary response text.
    pub fn failure_phrase(&self) -> &'static str {
        match self {
            TaskKind::Explain => "explaining the code",
            TaskKind::Improve => "suggesting improvements",
            TaskKind::Debug => "debugging the code",
        }
    }
}

// Instruction prefixes for each task. The table is total over TaskKind and
// fixed for the lifetime of the process.
static PROMPTS: Lazy<HashMap<TaskKind, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            TaskKind::Explain,
            "You are a helpful coding assistant. Please explain the following code in detail, \
             covering its purpose, functionality, and any important concepts used: ",
        ),
        (
            TaskKind::Improve,
            "You are a helpful coding assistant. Please analyze the following code and suggest \
             improvements for better efficiency, readability, and best practices: ",
        ),
        (
            TaskKind::Debug,
            "You are a helpful coding assistant. Please help identify potential issues or bugs \
             in the following code and suggest fixes: ",
        ),
    ])
});

pub struct PromptBuilder;

impl PromptBuilder {
    /// The instruction prefix for a task.
    pub fn template(kind: TaskKind) -> &'static str {
        PROMPTS[&kind]
    }

    /// Build the full prompt for a task: the instruction prefix followed
    /// directly by the code, with no separator inserted. The code is passed
    /// through untouched.
    ///
    /// For `TaskKind::Debug`, an error message that is non-empty after
    /// trimming is appended on its own annotated line.
    pub fn build(kind: TaskKind, code: &str, error_message: Option<&str>) -> String {
        let mut prompt = format!("{}{}", Self::template(kind), code);

        if kind == TaskKind::Debug {
            if let Some(message) = error_message {
                let message = message.trim();
                if !message.is_empty() {
                    prompt.push_str("\nError message received: ");
                    prompt.push_str(message);
                }
            }
        }

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_task_has_a_template() {
        for kind in TaskKind::iter() {
            assert!(!PromptBuilder::template(kind).is_empty());
        }
    }

    #[test]
    fn build_is_template_plus_code() {
        for kind in TaskKind::iter() {
            let prompt = PromptBuilder::build(kind, "fn main() {}", None);
            assert_eq!(
                prompt,
                format!("{}fn main() {{}}", PromptBuilder::template(kind))
            );
        }
    }

    #[test]
    fn build_accepts_empty_code() {
        let prompt = PromptBuilder::build(TaskKind::Explain, "", None);
        assert_eq!(prompt, PromptBuilder::template(TaskKind::Explain));
    }

    #[test]
    fn debug_appends_error_annotation() {
        let prompt = PromptBuilder::build(TaskKind::Debug, "x = 1/0", Some("ZeroDivisionError"));
        assert_eq!(
            prompt,
            format!(
                "{}x = 1/0\nError message received: ZeroDivisionError",
                PromptBuilder::template(TaskKind::Debug)
            )
        );
    }

    #[test]
    fn debug_trims_error_message() {
        let prompt = PromptBuilder::build(TaskKind::Debug, "x", Some("  boom \n"));
        assert!(prompt.ends_with("\nError message received: boom"));
    }

    #[test]
    fn debug_skips_empty_or_blank_error_message() {
        let bare = PromptBuilder::build(TaskKind::Debug, "x", None);
        assert_eq!(PromptBuilder::build(TaskKind::Debug, "x", Some("")), bare);
        assert_eq!(
            PromptBuilder::build(TaskKind::Debug, "x", Some("   \t")),
            bare
        );
    }

    #[test]
    fn error_annotation_only_applies_to_debug() {
        let prompt = PromptBuilder::build(TaskKind::Explain, "x", Some("boom"));
        assert!(!prompt.contains("Error message received"));
    }
}
