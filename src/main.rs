use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

mod app;
mod config;
mod llm;
mod ui;

use llm::{CodeAssistant, GeminiClient};
use ui::display;
use ui::prompt::Prompt;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Turn on verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure the application
    Config {
        /// Set the Gemini API endpoint URL
        #[arg(long)]
        api_url: Option<String>,

        /// Set the Gemini API key
        #[arg(long)]
        api_key: Option<String>,

        /// Set the Gemini model to use
        #[arg(long)]
        model: Option<String>,
    },

    /// Explain a piece of code
    Explain {
        /// File to read the code from; stdin when omitted
        file: Option<PathBuf>,
    },

    /// Suggest improvements for a piece of code
    Improve {
        /// File to read the code from; stdin when omitted
        file: Option<PathBuf>,
    },

    /// Look for bugs in a piece of code
    Debug {
        /// File to read the code from; stdin when omitted
        file: Option<PathBuf>,

        /// An error message observed when running the code
        #[arg(long)]
        error: Option<String>,
    },

    /// Run explanation, improvement, and debug analysis together
    Analyze {
        /// File to read the code from; stdin when omitted
        file: Option<PathBuf>,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let config_path = cli.config.unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("code-helper/config.toml")
    });

    if let Some(Commands::Config {
        api_url,
        api_key,
        model,
    }) = &cli.command
    {
        config::update_config(&config_path, api_url, api_key, model)?;
        println!("Configuration updated successfully.");
        return Ok(());
    }

    let mut config = config::load_or_create_config(&config_path)?;
    resolve_api_key(&mut config)?;

    let client = GeminiClient::new(&config.llm)?;
    let assistant = CodeAssistant::new(Arc::new(client));

    match &cli.command {
        Some(Commands::Explain { file }) => {
            let code = read_code_input(file.as_deref())?;
            println!("{}", assistant.explain(&code).await);
        }
        Some(Commands::Improve { file }) => {
            let code = read_code_input(file.as_deref())?;
            println!("{}", assistant.suggest_improvements(&code).await);
        }
        Some(Commands::Debug { file, error }) => {
            let code = read_code_input(file.as_deref())?;
            println!("{}", assistant.debug(&code, error.as_deref()).await);
        }
        Some(Commands::Analyze { file, json }) => {
            let code = read_code_input(file.as_deref())?;
            let analysis = assistant.analyze(&code).await;

            if *json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                display::print_section("Code Explanation", &analysis.explanation);
                display::print_section("Suggested Improvements", &analysis.improvements);
                display::print_section("Debug Suggestions", &analysis.debug_suggestions);
            }
        }
        Some(Commands::Config { .. }) => unreachable!(),
        None => {
            // No subcommand, enter the interactive menu
            let app = app::App::new(assistant);
            app.run().await?;
        }
    }

    Ok(())
}

/// Fill in the API key from the environment or an interactive prompt when
/// the config file does not carry one. The key is never written back.
fn resolve_api_key(config: &mut config::Config) -> Result<()> {
    if !config.llm.api_key.is_empty() {
        return Ok(());
    }

    if let Ok(key) = std::env::var("GEMINI_API_KEY") {
        if !key.is_empty() {
            config.llm.api_key = key;
            return Ok(());
        }
    }

    let prompt = Prompt::new();
    let key = prompt.read_line("Please enter your Gemini API key:")?;
    if key.is_empty() {
        bail!("A Gemini API key is required");
    }
    config.llm.api_key = key;

    Ok(())
}

fn read_code_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => std::io::read_to_string(std::io::stdin()).context("Failed to read code from stdin"),
    }
}
