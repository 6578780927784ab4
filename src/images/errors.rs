use axum::http::StatusCode;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

#[derive(Debug)]
pub enum ImagesApiError {
    MissingImage,
    InvalidImage,
    ImageTooLarge { max_bytes: usize },
    MissingCredential,
    NoImageReturned {
        details: Option<String>,
        finish_reason: Option<String>,
    },
    UpstreamFailed {
        details: Option<String>,
        message: Option<String>,
    },
    Cancelled,
}

impl ImagesApiError {
    pub fn value(&self) -> ApiError {
        match self {
            Self::MissingImage => ApiError::new(StatusCode::BAD_REQUEST, "No image data provided"),
            Self::InvalidImage => {
                ApiError::new(StatusCode::BAD_REQUEST, "Image data is not valid base64.")
            }
            Self::ImageTooLarge { max_bytes } => ApiError::new(
                StatusCode::PAYLOAD_TOO_LARGE,
                format!("File size exceeds {} limit.", format_size(*max_bytes)),
            ),
            Self::MissingCredential => ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "API key not configured. Set GEMINI_API_KEY in environment variables.",
            ),
            Self::NoImageReturned {
                details,
                finish_reason,
            } => ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "AI failed to return an image. It might be a safety refusal.",
            )
            .with_details(details.to_owned())
            .with_message(
                finish_reason
                    .as_ref()
                    .map(|reason| format!("Finish reason: {}", reason)),
            ),
            Self::UpstreamFailed { details, message } => ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to process image with the AI service.",
            )
            .with_details(details.to_owned())
            .with_message(message.to_owned()),
            Self::Cancelled => DefaultApiError::ShuttingDown.value(),
        }
    }
}

fn format_size(bytes: usize) -> String {
    const MB: usize = 1024 * 1024;
    const KB: usize = 1024;

    if bytes >= MB && bytes % MB == 0 {
        format!("{}MB", bytes / MB)
    } else if bytes >= KB && bytes % KB == 0 {
        format!("{}KB", bytes / KB)
    } else {
        format!("{} bytes", bytes)
    }
}
