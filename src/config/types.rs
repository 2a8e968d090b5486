use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub translator: TranslatorConfig,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub api_key: String,
    #[serde(default = "default_max_dimension")]
    pub max_width: u32,
    #[serde(default = "default_max_dimension")]
    pub max_height: u32,
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.translator.validate()
    }
}

impl TranslatorConfig {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            max_width: default_max_dimension(),
            max_height: default_max_dimension(),
            jpeg_quality: default_jpeg_quality(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::config("translator.api_key must not be empty"));
        }
        if self.max_width == 0 || self.max_height == 0 {
            return Err(Error::config(format!(
                "translator bounding box must be non-zero, got {}x{}",
                self.max_width, self.max_height
            )));
        }
        if !(0.0..=1.0).contains(&self.jpeg_quality) {
            return Err(Error::config(format!(
                "translator.jpeg_quality must be within 0.0..=1.0, got {}",
                self.jpeg_quality
            )));
        }
        reqwest::Url::parse(&self.endpoint).map_err(|e| {
            Error::config(format!("invalid translator.endpoint '{}': {}", self.endpoint, e))
        })?;
        Ok(())
    }
}

// Keeps the API key out of logs and panic messages.
impl fmt::Debug for TranslatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslatorConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("max_width", &self.max_width)
            .field("max_height", &self.max_height)
            .field("jpeg_quality", &self.jpeg_quality)
            .finish()
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_endpoint() -> String {
    "http://world-dishes-translator.allstuffaround.com/api/translate".to_string()
}

fn default_max_dimension() -> u32 {
    1024
}

fn default_jpeg_quality() -> f32 {
    0.7
}

fn default_log_level() -> String {
    "info".to_string()
}
