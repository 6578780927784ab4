use crate::{
    app::models::{api_error::ApiError, upstream_error::UpstreamError},
    AppState,
};

use super::{
    apis::gemini::{
        self,
        models::input_spec::InputSpec,
        structs::{
            gemini_error_response::GeminiErrorResponse,
            gemini_generate_content_response::GeminiGenerateContentResponse,
        },
    },
    dtos::process_image_dto::ProcessImageDto,
    enums::edit_instruction::EditInstruction,
    errors::ImagesApiError,
    models::{
        model_summary::{ModelSummary, ModelsResponse},
        process_image_response::ProcessImageResponse,
    },
    util::data_url::strip_data_url_prefix,
};

pub async fn process_image(
    dto: &ProcessImageDto,
    state: &AppState,
) -> Result<ProcessImageResponse, ApiError> {
    let dto = dto.sanitized();

    let Some(image_data) = dto.image_data.as_deref() else {
        return Err(ImagesApiError::MissingImage.value());
    };

    let Some(api_key) = state.gemini.api_key() else {
        tracing::error!("GEMINI_API_KEY is not configured");
        return Err(ImagesApiError::MissingCredential.value());
    };

    let image_base64 = strip_data_url_prefix(image_data);
    if let Err(e) = check_image(image_base64, state.gemini.max_image_bytes) {
        return Err(e.value());
    }

    let instruction = EditInstruction::from_replace_background(dto.replace_background.as_deref());
    tracing::debug!(instruction = instruction.name(), "editing image");

    let input_spec = InputSpec::new(&instruction.prompt(), image_base64);

    let result = gemini::service::generate_content(
        &input_spec,
        api_key,
        &state.gemini,
        &state.http_client,
        &state.shutdown,
    )
    .await;

    match result {
        Ok(response) => match extract_image(&response) {
            Ok(image_data) => Ok(ProcessImageResponse { image_data }),
            Err(e) => Err(e.value()),
        },
        Err(e) => Err(from_upstream_error(&e).value()),
    }
}

pub async fn get_models(state: &AppState) -> Result<ModelsResponse, ApiError> {
    let Some(api_key) = state.gemini.api_key() else {
        tracing::error!("GEMINI_API_KEY is not configured");
        return Err(ImagesApiError::MissingCredential.value());
    };

    match gemini::service::list_models(api_key, &state.gemini, &state.http_client, &state.shutdown)
        .await
    {
        Ok(response) => {
            if response.next_page_token.is_some() {
                tracing::debug!("model list truncated to the first page");
            }

            Ok(ModelsResponse {
                models: response.models.into_iter().map(ModelSummary::from).collect(),
            })
        }
        Err(e) => Err(from_upstream_error(&e).value()),
    }
}

fn check_image(image_base64: &str, max_bytes: usize) -> Result<(), ImagesApiError> {
    if image_base64.is_empty() {
        return Err(ImagesApiError::MissingImage);
    }

    let Ok(bytes) = base64::decode(image_base64) else {
        return Err(ImagesApiError::InvalidImage);
    };

    if bytes.len() > max_bytes {
        tracing::debug!(bytes = bytes.len(), max_bytes, "rejecting oversized image");
        return Err(ImagesApiError::ImageTooLarge { max_bytes });
    }

    match imagesize::blob_size(&bytes) {
        Ok(size) => tracing::debug!(
            bytes = bytes.len(),
            width = size.width,
            height = size.height,
            "received image"
        ),
        Err(e) => tracing::warn!(bytes = bytes.len(), "unrecognised image format: {:?}", e),
    }

    Ok(())
}

/// Returns the base64 image payload untouched, or the refusal diagnostics when
/// the model answered without an image.
fn extract_image(response: &GeminiGenerateContentResponse) -> Result<String, ImagesApiError> {
    if let Some(image_data) = response.image_data() {
        return Ok(image_data.to_string());
    }

    if let Some(block_reason) = response.block_reason() {
        tracing::error!(
            block_reason,
            block_reason_message = ?response.block_reason_message(),
            "prompt blocked by the model"
        );
        return Err(ImagesApiError::NoImageReturned {
            details: response.block_reason_message().map(str::to_string),
            finish_reason: Some(block_reason.to_string()),
        });
    }

    let details = response.text();
    let finish_reason = response.finish_reason().map(str::to_string);
    let finish_message = response
        .candidates
        .first()
        .and_then(|candidate| candidate.finish_message.as_deref());
    tracing::error!(?finish_reason, ?finish_message, ?details, "model returned no image");

    Err(ImagesApiError::NoImageReturned {
        details,
        finish_reason,
    })
}

fn from_upstream_error(e: &UpstreamError) -> ImagesApiError {
    match e {
        UpstreamError::Cancelled => ImagesApiError::Cancelled,
        UpstreamError::Status { status, body } => {
            if e.is_transient() {
                tracing::error!(status = status.as_u16(), "upstream call failed after retries");
            } else {
                tracing::error!(status = status.as_u16(), "upstream rejected the request");
            }

            ImagesApiError::UpstreamFailed {
                details: GeminiErrorResponse::message_from(body),
                message: Some(format!("Upstream responded with HTTP {}.", status.as_u16())),
            }
        }
        UpstreamError::Transport(message) => {
            tracing::error!(%message, "upstream unreachable after retries");
            ImagesApiError::UpstreamFailed {
                details: None,
                message: Some("Could not reach the AI service.".to_string()),
            }
        }
        UpstreamError::Decode(message) => {
            tracing::error!(%message, "upstream response could not be decoded");
            ImagesApiError::UpstreamFailed {
                details: None,
                message: Some("Unexpected response from the AI service.".to_string()),
            }
        }
    }
}
