use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub llm: LlmConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LlmConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: usize,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm: LlmConfig {
                api_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
                api_key: "".to_string(),
                model: "gemini-pro".to_string(),
                temperature: 0.7,
                max_tokens: 2048,
                request_timeout_secs: 60,
            },
        }
    }
}

pub fn load_or_create_config(config_path: &Path) -> Result<Config> {
    if !config_path.exists() {
        let config_dir = config_path
            .parent()
            .context("Config path has no parent directory")?;
        fs::create_dir_all(config_dir)?;

        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config)?;

        let mut file = File::create(config_path)?;
        file.write_all(toml_string.as_bytes())?;

        return Ok(config);
    }

    let mut file = File::open(config_path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

    Ok(config)
}

pub fn update_config(
    config_path: &Path,
    api_url: &Option<String>,
    api_key: &Option<String>,
    model: &Option<String>,
) -> Result<()> {
    let mut config = load_or_create_config(config_path)?;

    if let Some(url) = api_url {
        config.llm.api_url = url.clone();
    }

    if let Some(key) = api_key {
        config.llm.api_key = key.clone();
    }

    if let Some(model_name) = model {
        config.llm.model = model_name.clone();
    }

    let toml_string = toml::to_string_pretty(&config)?;
    let mut file = File::create(config_path)?;
    file.write_all(toml_string.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_default_config_on_first_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("code-helper/config.toml");

        let config = load_or_create_config(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.llm.model, "gemini-pro");
        assert!(config.llm.api_key.is_empty());
    }

    #[test]
    fn update_persists_selected_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        update_config(
            &path,
            &None,
            &Some("secret".to_string()),
            &Some("gemini-2.0-flash".to_string()),
        )
        .unwrap();

        let config = load_or_create_config(&path).unwrap();
        assert_eq!(config.llm.api_key, "secret");
        assert_eq!(config.llm.model, "gemini-2.0-flash");
        // untouched fields keep their defaults
        assert_eq!(config.llm.max_tokens, 2048);
    }
}
