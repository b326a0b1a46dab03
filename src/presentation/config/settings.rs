use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::{
    DEFAULT_EMAIL_PATTERN, DEFAULT_LOSS_KEYWORDS, DEFAULT_PHONE_PATTERN, DEFAULT_PROFIT_KEYWORDS,
    DEFAULT_SUMMARY_INPUT_CHARS, DEFAULT_VERBATIM_SUMMARY_CHARS,
};
use crate::domain::AnalysisProfile;
use crate::infrastructure::nlp::DEFAULT_SUMMARY_SENTENCES;

use super::Environment;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub analysis: AnalysisSettings,
    pub summarizer: SummarizerSettings,
    pub extraction: ExtractionSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layers `appsettings.{Environment}.toml` (optional) under `APP_`-prefixed
    /// environment variables, e.g. `APP_SERVER__PORT=9000`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                File::with_name(&environment.settings_file()).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("analysis.profit_keywords")
                    .with_list_parse_key("analysis.loss_keywords")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            max_upload_mb: 25,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    pub profile: AnalysisProfile,
    pub summary_input_chars: usize,
    pub verbatim_summary_chars: usize,
    pub summary_sentences: usize,
    pub profit_keywords: Vec<String>,
    pub loss_keywords: Vec<String>,
    pub email_pattern: String,
    pub phone_pattern: String,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            profile: AnalysisProfile::default(),
            summary_input_chars: DEFAULT_SUMMARY_INPUT_CHARS,
            verbatim_summary_chars: DEFAULT_VERBATIM_SUMMARY_CHARS,
            summary_sentences: DEFAULT_SUMMARY_SENTENCES,
            profit_keywords: DEFAULT_PROFIT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            loss_keywords: DEFAULT_LOSS_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            email_pattern: DEFAULT_EMAIL_PATTERN.to_string(),
            phone_pattern: DEFAULT_PHONE_PATTERN.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarizerProvider {
    #[default]
    Extractive,
    #[serde(rename = "openai")]
    OpenAi,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SummarizerSettings {
    pub provider: SummarizerProvider,
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
}

impl Default for SummarizerSettings {
    fn default() -> Self {
        Self {
            provider: SummarizerProvider::default(),
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    pub pdf_timeout_secs: u64,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            pdf_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}
