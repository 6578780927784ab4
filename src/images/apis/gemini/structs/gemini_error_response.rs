use serde::Deserialize;

// https://ai.google.dev/api/rest error envelope

#[derive(Debug, Deserialize)]
pub struct GeminiErrorResponse {
    pub error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct GeminiErrorBody {
    pub code: Option<u16>,
    pub message: Option<String>,
    pub status: Option<String>,
}

impl GeminiErrorResponse {
    /// Extracts the human readable message from an error body, if it has one.
    pub fn message_from(body: &str) -> Option<String> {
        let Ok(response) = serde_json::from_str::<GeminiErrorResponse>(body) else {
            return None;
        };

        response
            .error
            .message
            .map(|message| message.trim().to_string())
            .filter(|message| !message.is_empty())
    }
}
