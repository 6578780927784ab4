use serde::Deserialize;

pub static GENERATE_CONTENT_METHOD: &str = "generateContent";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiListModelsResponse {
    #[serde(default)]
    pub models: Vec<GeminiModelInfo>,
    #[serde(default, alias = "next_page_token")]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiModelInfo {
    pub name: String,
    #[serde(default, alias = "display_name")]
    pub display_name: Option<String>,
    #[serde(default, alias = "supported_generation_methods")]
    pub supported_generation_methods: Vec<String>,
}

impl GeminiModelInfo {
    pub fn supports_generate_content(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|method| method == GENERATE_CONTENT_METHOD)
    }
}
