// https://ai.google.dev/api/generate-content

use crate::app::{
    models::upstream_error::UpstreamError,
    util::{retry::fetch_json_with_retry, shutdown::Shutdown},
};

use super::{
    config::{GeminiConfig, API_KEY_HEADER},
    models::input_spec::InputSpec,
    structs::{
        gemini_generate_content_response::GeminiGenerateContentResponse,
        gemini_list_models_response::GeminiListModelsResponse,
    },
};

pub async fn generate_content(
    input_spec: &InputSpec,
    api_key: &str,
    config: &GeminiConfig,
    client: &reqwest::Client,
    shutdown: &Shutdown,
) -> Result<GeminiGenerateContentResponse, UpstreamError> {
    let url = config.generate_content_url();
    tracing::debug!(model = %config.model, "calling generateContent");

    fetch_json_with_retry(&config.retry_policy, shutdown, || {
        client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(input_spec)
    })
    .await
}

pub async fn list_models(
    api_key: &str,
    config: &GeminiConfig,
    client: &reqwest::Client,
    shutdown: &Shutdown,
) -> Result<GeminiListModelsResponse, UpstreamError> {
    let url = config.list_models_url();

    fetch_json_with_retry(&config.retry_policy, shutdown, || {
        client.get(&url).header(API_KEY_HEADER, api_key)
    })
    .await
}
