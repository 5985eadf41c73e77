use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::domain::{DEFAULT_MAX_CHARS, DEFAULT_MAX_PAGES, SummaryLimits};

use super::Environment;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub summary: SummarySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummarySettings {
    pub max_pages: usize,
    pub max_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Defaults, then `appsettings.{env}`, then `APP_*` variables, then `GEMINI_API_KEY`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::from_sources(
            Some(&environment.settings_file()),
            std::env::var(API_KEY_VAR).ok(),
        )
    }

    pub fn from_sources(
        settings_file: Option<&str>,
        api_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000_i64)?
            .set_default("server.max_upload_mb", 20_i64)?
            .set_default("llm.model", "gemini-2.0-flash")?
            .set_default("llm.base_url", "https://generativelanguage.googleapis.com")?
            .set_default("llm.timeout_secs", 60_i64)?
            .set_default("summary.max_pages", DEFAULT_MAX_PAGES as i64)?
            .set_default("summary.max_chars", DEFAULT_MAX_CHARS as i64)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?;

        if let Some(file) = settings_file {
            builder = builder.add_source(File::with_name(file).required(false));
        }

        builder
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("llm.api_key", api_key.filter(|k| !k.trim().is_empty()))?
            .build()?
            .try_deserialize()
    }
}

impl ServerSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

impl SummarySettings {
    pub fn limits(&self) -> SummaryLimits {
        SummaryLimits {
            max_pages: self.max_pages,
            max_chars: self.max_chars,
        }
    }
}
