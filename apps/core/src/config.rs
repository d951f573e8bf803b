//! Runtime configuration read from the environment.
//!
//! A `.env` file is loaded by the binary before `AppConfig::from_env` runs, so
//! every value here can come from either source.

use std::env;
use std::str::FromStr;
use url::Url;

use crate::error::AppError;

const DEFAULT_DATABASE_URL: &str = "sqlite://knowledge.sqlite";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    /// Bunyan-style JSON lines
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" | "bunyan" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!("Unknown LOG_FORMAT: {}", other))),
        }
    }
}

/// Settings for the remote summarizer.
#[derive(Debug, Clone, PartialEq)]
pub struct SummarizerConfig {
    /// `USE_OPENAI=true` turns the remote call on
    pub enabled: bool,
    pub api_key: Option<String>,
    pub base_url: Url,
    pub model: String,
    pub temperature: f32,
    /// Characters of input forwarded to the model
    pub max_input_chars: usize,
    pub timeout_secs: u64,
}

impl SummarizerConfig {
    /// True when the remote summarizer can actually be called.
    pub fn is_active(&self) -> bool {
        self.enabled && self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: None,
            // Constant URL, always parses.
            base_url: Url::parse(DEFAULT_OPENAI_BASE_URL).expect("Invalid default base URL"),
            model: DEFAULT_OPENAI_MODEL.to_string(),
            temperature: 0.2,
            max_input_chars: 4000,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    pub summarizer: SummarizerConfig,
}

fn var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match var(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("Invalid value for {}: {}", name, raw))),
        None => Ok(default),
    }
}

impl AppConfig {
    /// Build the configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        let log_format = match var("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        let base_url =
            var("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());
        let base_url = Url::parse(&base_url)
            .map_err(|e| AppError::Config(format!("Invalid OPENAI_BASE_URL: {}", e)))?;

        let summarizer = SummarizerConfig {
            enabled: var("USE_OPENAI").is_some_and(|v| v.trim().eq_ignore_ascii_case("true")),
            api_key: var("OPENAI_API_KEY"),
            base_url,
            model: var("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            timeout_secs: parse_var("OPENAI_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            ..SummarizerConfig::default()
        };

        Ok(Self {
            database_url: var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_var("PORT", DEFAULT_PORT)?,
            log_format,
            summarizer,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
