use crate::llm::CodeAssistant;
use crate::ui::display;
use crate::ui::prompt::Prompt;
use anyhow::Result;
use colored::Colorize;
use indicatif::ProgressBar;
use std::future::Future;
use std::time::Duration;

pub struct App {
    assistant: CodeAssistant,
    prompt: Prompt,
}

impl App {
    pub fn new(assistant: CodeAssistant) -> Self {
        Self {
            assistant,
            prompt: Prompt::new(),
        }
    }

    pub async fn run(&self) -> Result<()> {
        println!("{}", "Welcome to Code Helper!".bright_green().bold());

        loop {
            self.print_menu();
            let choice = self.prompt.read_menu_choice()?;

            if choice == "5" {
                println!("\nGoodbye! See you next time!");
                break;
            }

            if !matches!(choice.as_str(), "1" | "2" | "3" | "4") {
                println!(
                    "\n{}",
                    display::format_error("Invalid choice. Please select a valid option.")
                );
                continue;
            }

            println!();
            let code = self.prompt.read_code()?;

            match choice.as_str() {
                "1" => {
                    let analysis = self.with_spinner(self.assistant.analyze(&code)).await;
                    display::print_section("Code Explanation", &analysis.explanation);
                    display::print_section("Suggested Improvements", &analysis.improvements);
                    display::print_section("Debug Suggestions", &analysis.debug_suggestions);
                }
                "2" => {
                    let explanation = self.with_spinner(self.assistant.explain(&code)).await;
                    display::print_section("Code Explanation", &explanation);
                }
                "3" => {
                    let improvements = self
                        .with_spinner(self.assistant.suggest_improvements(&code))
                        .await;
                    display::print_section("Suggested Improvements", &improvements);
                }
                "4" => {
                    let error_message = self
                        .prompt
                        .read_line("\nEnter an error message (if any) or press Enter to skip:")?;
                    let error_message = if error_message.is_empty() {
                        None
                    } else {
                        Some(error_message.as_str())
                    };

                    let suggestions = self
                        .with_spinner(self.assistant.debug(&code, error_message))
                        .await;
                    display::print_section("Debug Suggestions", &suggestions);
                }
                _ => unreachable!(),
            }
        }

        Ok(())
    }

    fn print_menu(&self) {
        println!("\n{}", display::format_header("Code Helper Menu"));
        println!("1. Analyze code");
        println!("2. Explain code");
        println!("3. Suggest improvements");
        println!("4. Debug code");
        println!("5. Exit");
        println!();
    }

    async fn with_spinner<T>(&self, task: impl Future<Output = T>) -> T {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message("Waiting for Gemini...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = task.await;

        spinner.finish_and_clear();
        result
    }
}
