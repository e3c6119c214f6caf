use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

pub struct Prompt;

impl Prompt {
    pub fn new() -> Self {
        Self
    }

    /// Print a label and read a single trimmed line.
    pub fn read_line(&self, label: &str) -> Result<String> {
        print!("{} ", label);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        Ok(input.trim().to_string())
    }

    pub fn read_menu_choice(&self) -> Result<String> {
        self.read_line(&format!("{}", "Enter your choice (1-5):".bright_green()))
    }

    /// Read code line by line until the first empty line, joining the lines
    /// with single spaces.
    pub fn read_code(&self) -> Result<String> {
        println!(
            "{}",
            "Paste your code below. Press Enter twice to finish input:".bright_blue()
        );

        let stdin = io::stdin();
        let mut lines = Vec::new();
        for line in stdin.lock().lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                break;
            }
            lines.push(line.to_string());
        }

        Ok(lines.join(" "))
    }
}
