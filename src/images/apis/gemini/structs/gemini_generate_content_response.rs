use serde::Deserialize;

// Field names have shipped in both camelCase and snake_case across API
// versions, so every multi-word key accepts either spelling.

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
    #[serde(default, alias = "prompt_feedback")]
    pub prompt_feedback: Option<GeminiPromptFeedback>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    #[serde(default)]
    pub content: Option<GeminiContent>,
    #[serde(default, alias = "finish_reason")]
    pub finish_reason: Option<String>,
    #[serde(default, alias = "finish_message")]
    pub finish_message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeminiContent {
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiPart {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, alias = "inline_data")]
    pub inline_data: Option<GeminiInlineData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiInlineData {
    #[serde(default, alias = "mime_type")]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub data: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiPromptFeedback {
    #[serde(default, alias = "block_reason")]
    pub block_reason: Option<String>,
    #[serde(default, alias = "block_reason_message")]
    pub block_reason_message: Option<String>,
}

impl GeminiGenerateContentResponse {
    pub fn parts(&self) -> &[GeminiPart] {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| content.parts.as_slice())
            .unwrap_or_default()
    }

    /// Base64 payload of the first inline image part.
    pub fn image_data(&self) -> Option<&str> {
        self.parts()
            .iter()
            .filter_map(|part| part.inline_data.as_ref())
            .map(|inline_data| inline_data.data.as_str())
            .find(|data| !data.is_empty())
    }

    /// Text parts joined by newlines, typically a refusal or a description.
    pub fn text(&self) -> Option<String> {
        let texts: Vec<&str> = self
            .parts()
            .iter()
            .filter_map(|part| part.text.as_deref())
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .collect();

        if texts.is_empty() {
            return None;
        }

        Some(texts.join("\n"))
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.finish_reason.as_deref())
    }

    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref())
    }

    pub fn block_reason_message(&self) -> Option<&str> {
        self.prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason_message.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_data_camel_case() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "Here is the edited image." },
                        { "inlineData": { "mimeType": "image/png", "data": "iVBORw0KGgo=" } }
                    ]
                },
                "finishReason": "STOP"
            }]
        }"#;
        let response: GeminiGenerateContentResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.image_data(), Some("iVBORw0KGgo="));
        assert_eq!(response.finish_reason(), Some("STOP"));
        let inline_data = response.parts()[1].inline_data.as_ref().unwrap();
        assert_eq!(inline_data.mime_type.as_deref(), Some("image/png"));
    }

    #[test]
    fn test_image_data_snake_case() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        { "inline_data": { "mime_type": "image/png", "data": "iVBORw0KGgo=" } }
                    ]
                },
                "finish_reason": "STOP"
            }]
        }"#;
        let response: GeminiGenerateContentResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.image_data(), Some("iVBORw0KGgo="));
        assert_eq!(response.finish_reason(), Some("STOP"));
    }

    #[test]
    fn test_text_only_response() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "I can't help with editing this image." },
                        { "text": "  " },
                        { "text": "Try another photo." }
                    ]
                },
                "finishReason": "STOP"
            }]
        }"#;
        let response: GeminiGenerateContentResponse = serde_json::from_str(json).unwrap();

        assert!(response.image_data().is_none());
        assert_eq!(
            response.text().as_deref(),
            Some("I can't help with editing this image.\nTry another photo.")
        );
    }

    #[test]
    fn test_empty_inline_data_is_ignored() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        { "inlineData": { "mimeType": "image/png", "data": "" } },
                        { "inlineData": { "mimeType": "image/png", "data": "AAAA" } }
                    ]
                }
            }]
        }"#;
        let response: GeminiGenerateContentResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.image_data(), Some("AAAA"));
    }

    #[test]
    fn test_missing_content() {
        let json = r#"{ "candidates": [{ "finishReason": "IMAGE_SAFETY" }] }"#;
        let response: GeminiGenerateContentResponse = serde_json::from_str(json).unwrap();

        assert!(response.parts().is_empty());
        assert!(response.image_data().is_none());
        assert!(response.text().is_none());
        assert_eq!(response.finish_reason(), Some("IMAGE_SAFETY"));
    }

    #[test]
    fn test_prompt_feedback_block() {
        let json = r#"{
            "promptFeedback": {
                "blockReason": "SAFETY",
                "blockReasonMessage": "The prompt was blocked."
            }
        }"#;
        let response: GeminiGenerateContentResponse = serde_json::from_str(json).unwrap();

        assert!(response.candidates.is_empty());
        assert_eq!(response.block_reason(), Some("SAFETY"));
        assert_eq!(response.block_reason_message(), Some("The prompt was blocked."));
    }

    #[test]
    fn test_unknown_part_kinds_are_ignored() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        { "thought": true, "text": "thinking" },
                        { "functionCall": { "name": "noop" } },
                        { "inlineData": { "mimeType": "image/png", "data": "AAAA" } }
                    ]
                }
            }],
            "usageMetadata": { "totalTokenCount": 10 }
        }"#;
        let response: GeminiGenerateContentResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.image_data(), Some("AAAA"));
    }
}
