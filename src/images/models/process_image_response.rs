use serde::Serialize;

/// Raw base64 of the edited image, without a data URL prefix.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessImageResponse {
    pub image_data: String,
}
