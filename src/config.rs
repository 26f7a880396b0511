use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use anyhow::Result;
use regex::Regex;
use tracing::debug;

const API_KEY_VARS: [&str; 2] = ["OPEN_AI_API_KEY", "OPENAI_API_KEY"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub translator_config: TranslatorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

/// Shape the model is asked to answer in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

/// Completion service credential. Never printed.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Read the credential from the process environment
    pub fn from_env() -> Result<Self> {
        API_KEY_VARS
            .iter()
            .find_map(|name| std::env::var(name).ok().filter(|v| !v.is_empty()))
            .map(Self)
            .ok_or_else(|| anyhow::anyhow!(
                "No completion service credential found. Set one of: {:?}", API_KEY_VARS
            ))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(path, &content)
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            debug!("Config file {} not found, using defaults", path);
            Ok(Self::default())
        }
    }

    fn parse(path: &str, content: &str) -> Result<Self> {
        let content = substitute_env(content);

        // Determine file type by extension
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(serde_yaml::from_str(&content)?)
        }
    }
}

/// Replace `${VAR_NAME}` with the variable's value, leaving unknown ones as-is
fn substitute_env(content: &str) -> String {
    let pattern = Regex::new(r"\$\{(\w+)\}").expect("static regex");
    pattern
        .replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            output_format: OutputFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = Config::parse("conf.yaml", "system_config:\n  port: 9000\n").unwrap();
        assert_eq!(config.system_config.port, 9000);
        assert_eq!(config.system_config.host, "0.0.0.0");
        assert_eq!(config.translator_config.model, "gpt-4o-mini");
        assert_eq!(config.translator_config.output_format, OutputFormat::Json);
    }

    #[test]
    fn parses_json_by_extension() {
        let raw = r#"{"translator_config": {"model": "gpt-4o", "output_format": "text"}}"#;
        let config = Config::parse("conf.json", raw).unwrap();
        assert_eq!(config.translator_config.model, "gpt-4o");
        assert_eq!(config.translator_config.output_format, OutputFormat::Text);
        assert_eq!(config.translator_config.base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn substitutes_known_env_vars_only() {
        std::env::set_var("HINDI_TRANSLATOR_TEST_BASE", "http://localhost:1234/v1");
        let out =
            substitute_env("a: ${HINDI_TRANSLATOR_TEST_BASE}\nb: ${HINDI_TRANSLATOR_UNSET_VAR}");
        assert_eq!(out, "a: http://localhost:1234/v1\nb: ${HINDI_TRANSLATOR_UNSET_VAR}");
    }

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("sk-secret");
        assert_eq!(format!("{:?}", key), "ApiKey(***)");
        assert_eq!(key.expose(), "sk-secret");
    }
}
