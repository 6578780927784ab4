use axum::{extract::State, http::StatusCode, Json};
use tracing::Instrument;
use uuid::Uuid;
use validator::Validate;

use crate::{
    app::{
        models::{api_error::ApiError, json_from_request::JsonFromRequest},
        util::validator::first_message,
    },
    AppState,
};

use super::{
    dtos::process_image_dto::ProcessImageDto,
    models::{model_summary::ModelsResponse, process_image_response::ProcessImageResponse},
    service,
};

pub async fn process_image(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<ProcessImageDto>,
) -> Result<Json<ProcessImageResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("process_image", %request_id);

    match dto.validate() {
        Ok(_) => match service::process_image(&dto, &state).instrument(span).await {
            Ok(response) => Ok(Json(response)),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError::new(StatusCode::BAD_REQUEST, first_message(&e))),
    }
}

pub async fn get_models(State(state): State<AppState>) -> Result<Json<ModelsResponse>, ApiError> {
    match service::get_models(&state).await {
        Ok(models) => Ok(Json(models)),
        Err(e) => Err(e),
    }
}
