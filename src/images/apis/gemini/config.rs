use std::time::Duration;

use crate::app::{env::Envy, util::retry::RetryPolicy};

use super::enums::gemini_model::GeminiModel;

pub static API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub static API_VERSION: &str = "v1beta";
pub static API_KEY_HEADER: &str = "x-goog-api-key";

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;
const MAX_RETRIES_LIMIT: u32 = 10;

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_version: String,
    pub api_base_url: String,
    pub retry_policy: RetryPolicy,
    pub timeout: Duration,
    pub max_image_bytes: usize,
}

impl GeminiConfig {
    pub fn from_envy(envy: &Envy) -> Result<GeminiConfig, String> {
        let defaults = RetryPolicy::default();
        let retry_policy = RetryPolicy {
            max_retries: envy.upstream_max_retries.unwrap_or(defaults.max_retries),
            initial_backoff: envy
                .upstream_initial_backoff_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.initial_backoff),
            max_backoff: envy
                .upstream_max_backoff_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.max_backoff),
        };

        let config = GeminiConfig {
            api_key: envy.gemini_api_key.to_owned(),
            model: envy
                .gemini_model
                .to_owned()
                .unwrap_or(GeminiModel::FLASH_IMAGE_PREVIEW.to_string()),
            api_version: envy
                .gemini_api_version
                .to_owned()
                .unwrap_or(API_VERSION.to_string()),
            api_base_url: envy
                .gemini_api_base_url
                .to_owned()
                .unwrap_or(API_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            retry_policy,
            timeout: Duration::from_secs(envy.upstream_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            max_image_bytes: envy.max_image_bytes.unwrap_or(DEFAULT_MAX_IMAGE_BYTES),
        };

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("GEMINI_MODEL must not be empty".to_string());
        }
        if self.api_version.trim().is_empty() {
            return Err("GEMINI_API_VERSION must not be empty".to_string());
        }
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(format!(
                "GEMINI_API_BASE_URL must be an http(s) URL, got {:?}",
                self.api_base_url
            ));
        }
        if self.retry_policy.max_retries > MAX_RETRIES_LIMIT {
            return Err(format!(
                "UPSTREAM_MAX_RETRIES must be at most {}",
                MAX_RETRIES_LIMIT
            ));
        }
        if self.retry_policy.initial_backoff.is_zero() {
            return Err("UPSTREAM_INITIAL_BACKOFF_MS must be greater than 0".to_string());
        }
        if self.retry_policy.max_backoff < self.retry_policy.initial_backoff {
            return Err(
                "UPSTREAM_MAX_BACKOFF_MS must not be smaller than UPSTREAM_INITIAL_BACKOFF_MS"
                    .to_string(),
            );
        }
        if self.timeout.is_zero() {
            return Err("UPSTREAM_TIMEOUT_SECS must be greater than 0".to_string());
        }
        if self.max_image_bytes == 0 {
            return Err("MAX_IMAGE_BYTES must be greater than 0".to_string());
        }

        Ok(())
    }

    /// The configured key, ignoring a blank value.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.api_base_url, self.api_version, self.model
        )
    }

    pub fn list_models_url(&self) -> String {
        format!("{}/{}/models", self.api_base_url, self.api_version)
    }
}
