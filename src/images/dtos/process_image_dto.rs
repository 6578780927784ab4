use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProcessImageDto {
    #[validate(
        required(message = "No image data provided"),
        length(min = 1, message = "No image data provided")
    )]
    pub image_data: Option<String>,
    #[validate(length(max = 500, message = "replaceBackground must be at most 500 characters."))]
    pub replace_background: Option<String>,
}

impl ProcessImageDto {
    pub fn sanitized(&self) -> Self {
        return Self {
            image_data: self.image_data.as_ref().map(|data| data.trim().to_string()),
            replace_background: self
                .replace_background
                .as_ref()
                .map(|scene| scene.trim().replace('\n', " ").replace('\r', ""))
                .filter(|scene| !scene.is_empty()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(json: &str) -> ProcessImageDto {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_missing_image_data_fails_validation() {
        assert!(dto(r#"{}"#).validate().is_err());
        assert!(dto(r#"{ "imageData": null }"#).validate().is_err());
        assert!(dto(r#"{ "imageData": "" }"#).validate().is_err());
        assert!(dto(r#"{ "imageData": "AAAA" }"#).validate().is_ok());
    }

    #[test]
    fn test_long_replace_background_fails_validation() {
        let scene = "a".repeat(501);
        let dto = ProcessImageDto {
            image_data: Some("AAAA".to_string()),
            replace_background: Some(scene),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_sanitized_drops_blank_scene() {
        let dto = dto(r#"{ "imageData": " AAAA ", "replaceBackground": "   " }"#).sanitized();
        assert_eq!(dto.image_data.as_deref(), Some("AAAA"));
        assert!(dto.replace_background.is_none());
    }

    #[test]
    fn test_sanitized_flattens_scene() {
        let dto = dto(r#"{ "imageData": "AAAA", "replaceBackground": " a beach\nat sunset " }"#)
            .sanitized();
        assert_eq!(dto.replace_background.as_deref(), Some("a beach at sunset"));
    }
}
