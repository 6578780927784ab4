use serde::Serialize;

use crate::images::apis::gemini::structs::gemini_list_models_response::GeminiModelInfo;

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSummary {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub supports_generate_content: bool,
}

impl From<GeminiModelInfo> for ModelSummary {
    fn from(info: GeminiModelInfo) -> Self {
        let supports_generate_content = info.supports_generate_content();

        Self {
            name: info
                .name
                .strip_prefix("models/")
                .unwrap_or(&info.name)
                .to_string(),
            display_name: info.display_name,
            supports_generate_content,
        }
    }
}
