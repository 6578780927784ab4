use axum::http::StatusCode;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    ShuttingDown,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::ShuttingDown => {
                ApiError::new(StatusCode::SERVICE_UNAVAILABLE, "Server is shutting down.")
            }
        }
    }
}
