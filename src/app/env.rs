use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envy {
    pub app_env: Option<String>,
    pub port: Option<u16>,

    pub gemini_api_key: Option<String>,
    pub gemini_model: Option<String>,
    pub gemini_api_version: Option<String>,
    pub gemini_api_base_url: Option<String>,

    pub upstream_max_retries: Option<u32>,
    pub upstream_initial_backoff_ms: Option<u64>,
    pub upstream_max_backoff_ms: Option<u64>,
    pub upstream_timeout_secs: Option<u64>,

    pub max_image_bytes: Option<usize>,
}

impl Envy {
    pub fn app_env(&self) -> &str {
        self.app_env.as_deref().unwrap_or("development")
    }
}
