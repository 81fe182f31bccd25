use std::fmt;
use std::net::IpAddr;
use std::time::Duration;

use anyhow::{bail, ensure, Context, Result};

use crate::chat::template::PromptTemplate;
use crate::llm_client::prompts::{
    QUESTION_SLOT, QUESTION_SYSTEM, QUESTION_USER_TEMPLATE, SUMMARY_SLOT, SUMMARY_SYSTEM,
    SUMMARY_USER_TEMPLATE,
};

const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_MODEL: &str = "llama3-8b-8192";
const DEFAULT_TIMEOUT_SECS: u64 = 120;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Settings for the hosted completion API.
#[derive(Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Prompt templates, validated once at startup.
#[derive(Debug, Clone)]
pub struct PromptConfig {
    pub question: PromptTemplate,
    pub summary: PromptTemplate,
}

/// Application configuration loaded from environment variables.
/// Startup fails if the API key is missing or any field is invalid.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmConfig,
    pub prompts: PromptConfig,
    pub host: IpAddr,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let api_key = lookup("GROQ_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .context("Required environment variable 'GROQ_API_KEY' is not set")?;

        let api_url = var("GROQ_API_URL", DEFAULT_API_URL);
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            bail!("GROQ_API_URL must be an http(s) URL, got '{api_url}'");
        }

        let model = var("LLM_MODEL", DEFAULT_MODEL);
        ensure!(!model.trim().is_empty(), "LLM_MODEL must not be empty");

        let timeout_secs = parse_positive::<u64>(&lookup, "LLM_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

        let question = PromptTemplate::new(
            var("QUESTION_SYSTEM_PROMPT", QUESTION_SYSTEM),
            var("QUESTION_USER_TEMPLATE", QUESTION_USER_TEMPLATE),
            QUESTION_SLOT,
        )
        .context("Invalid question prompt configuration")?;

        let summary = PromptTemplate::new(
            var("SUMMARY_SYSTEM_PROMPT", SUMMARY_SYSTEM),
            var("SUMMARY_USER_TEMPLATE", SUMMARY_USER_TEMPLATE),
            SUMMARY_SLOT,
        )
        .context("Invalid summary prompt configuration")?;

        Ok(Config {
            llm: LlmConfig {
                api_key,
                api_url,
                model,
                timeout: Duration::from_secs(timeout_secs),
            },
            prompts: PromptConfig { question, summary },
            host: var("HOST", "0.0.0.0")
                .parse::<IpAddr>()
                .context("HOST must be a valid IP address")?,
            port: var("PORT", "5000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            max_upload_bytes: parse_positive::<usize>(
                &lookup,
                "MAX_UPLOAD_BYTES",
                DEFAULT_MAX_UPLOAD_BYTES,
            )?,
            rust_log: var("RUST_LOG", "info"),
        })
    }
}

fn parse_positive<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr + PartialOrd + Default,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<T>()
        .with_context(|| format!("{key} must be a positive integer"))?;
    ensure!(value > T::default(), "{key} must be greater than zero");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_with(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let err = config_with(&[]).unwrap_err();
        assert!(err.to_string().contains("GROQ_API_KEY"));
    }

    #[test]
    fn test_blank_api_key_is_fatal() {
        assert!(config_with(&[("GROQ_API_KEY", "   ")]).is_err());
    }

    #[test]
    fn test_defaults() {
        let config = config_with(&[("GROQ_API_KEY", "gsk_test")]).unwrap();
        assert_eq!(config.llm.model, "llama3-8b-8192");
        assert_eq!(config.llm.api_url, DEFAULT_API_URL);
        assert_eq!(config.llm.timeout, Duration::from_secs(120));
        assert_eq!(config.port, 5000);
        assert_eq!(config.max_upload_bytes, 16 * 1024 * 1024);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides() {
        let config = config_with(&[
            ("GROQ_API_KEY", "gsk_test"),
            ("LLM_MODEL", "llama-3.1-8b-instant"),
            ("PORT", "8080"),
            ("LLM_TIMEOUT_SECS", "30"),
            ("SUMMARY_USER_TEMPLATE", "Summarize this:\n{text}"),
        ])
        .unwrap();
        assert_eq!(config.llm.model, "llama-3.1-8b-instant");
        assert_eq!(config.port, 8080);
        assert_eq!(config.llm.timeout, Duration::from_secs(30));
        assert_eq!(
            config.prompts.summary.render("abc").user,
            "Summarize this:\nabc"
        );
    }

    #[test]
    fn test_template_without_slot_is_rejected() {
        let result = config_with(&[
            ("GROQ_API_KEY", "gsk_test"),
            ("QUESTION_USER_TEMPLATE", "Question: {text}"),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        assert!(config_with(&[("GROQ_API_KEY", "k"), ("PORT", "http")]).is_err());
        assert!(config_with(&[("GROQ_API_KEY", "k"), ("LLM_TIMEOUT_SECS", "0")]).is_err());
        assert!(config_with(&[("GROQ_API_KEY", "k"), ("MAX_UPLOAD_BYTES", "-1")]).is_err());
    }

    #[test]
    fn test_non_http_url_is_rejected() {
        assert!(config_with(&[("GROQ_API_KEY", "k"), ("GROQ_API_URL", "ftp://x")]).is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = config_with(&[("GROQ_API_KEY", "gsk_secret")]).unwrap();
        let printed = format!("{config:?}");
        assert!(!printed.contains("gsk_secret"));
        assert!(printed.contains("<redacted>"));
    }
}
