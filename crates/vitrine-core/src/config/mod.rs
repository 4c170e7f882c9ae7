mod defaults;


use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::VitrineError;
use crate::i18n::Language;
use defaults::*;

/// Environment variable that overrides `api.base_url`.
pub const API_URL_ENV: &str = "VITRINE_API_URL";

/// Top-level Vitrine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

/// General site settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Language used when the caller does not pick one.
    #[serde(default = "default_language")]
    pub default_language: Language,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            log_level: default_log_level(),
        }
    }
}

/// CMS API location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Prefix joined with every endpoint path.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub endpoints: EndpointsConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoints: EndpointsConfig::default(),
        }
    }
}

/// Endpoint paths, relative to `base_url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    #[serde(default = "default_contact_path")]
    pub contact: String,
    #[serde(default = "default_contact_submit_path")]
    pub contact_submit: String,
    #[serde(default = "default_privacy_policy_path")]
    pub privacy_policy: String,
    #[serde(default = "default_terms_path")]
    pub terms: String,
    #[serde(default = "default_about_us_path")]
    pub about_us: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            contact: default_contact_path(),
            contact_submit: default_contact_submit_path(),
            privacy_policy: default_privacy_policy_path(),
            terms: default_terms_path(),
            about_us: default_about_us_path(),
        }
    }
}

impl Config {
    /// Apply environment overrides from `lookup`.
    ///
    /// Only `VITRINE_API_URL` is honoured. Blank values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_ENV) {
            let url = url.trim();
            if !url.is_empty() {
                info!("{API_URL_ENV} overrides api.base_url: {url}");
                self.api.base_url = url.to_string();
            }
        }
    }
}

/// Load configuration from a TOML file, then apply environment overrides.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, VitrineError> {
    let mut config = load_file(path)?;
    config.apply_env(|key| std::env::var(key).ok());
    Ok(config)
}

fn load_file(path: &str) -> Result<Config, VitrineError> {
    let path = Path::new(path);
    if !path.exists() {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;

    toml::from_str(&content)
        .map_err(|e| VitrineError::Config(format!("failed to parse config: {}", e)))
}
