use serde::Serialize;

pub static RESPONSE_MODALITIES: [&str; 2] = ["TEXT", "IMAGE"];

/// Body of a `generateContent` call: one user turn holding the instruction
/// followed by the inline image.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSpec {
    pub contents: Vec<InputContent>,
    pub generation_config: InputGenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct InputContent {
    pub parts: Vec<InputPart>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum InputPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InputInlineData,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputInlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputGenerationConfig {
    pub response_modalities: Vec<String>,
}

impl InputSpec {
    pub fn new(prompt: &str, image_base64: &str) -> InputSpec {
        InputSpec {
            contents: vec![InputContent {
                parts: vec![
                    InputPart::Text {
                        text: prompt.to_string(),
                    },
                    InputPart::InlineData {
                        inline_data: InputInlineData {
                            mime_type: mime::IMAGE_PNG.to_string(),
                            data: image_base64.to_string(),
                        },
                    },
                ],
            }],
            generation_config: InputGenerationConfig {
                response_modalities: RESPONSE_MODALITIES.iter().map(|m| m.to_string()).collect(),
            },
        }
    }
}
