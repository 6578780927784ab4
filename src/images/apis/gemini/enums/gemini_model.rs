#[non_exhaustive]
pub struct GeminiModel;

impl GeminiModel {
    pub const FLASH_IMAGE_PREVIEW: &str = "gemini-2.5-flash-image-preview";
}
