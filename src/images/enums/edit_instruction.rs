#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditInstruction {
    RemoveBackground,
    ReplaceBackground(String),
}

impl EditInstruction {
    pub fn from_replace_background(scene: Option<&str>) -> Self {
        match scene.map(str::trim).filter(|scene| !scene.is_empty()) {
            Some(scene) => Self::ReplaceBackground(scene.to_string()),
            None => Self::RemoveBackground,
        }
    }

    /// Every prompt insists on image-only output so the model is less likely
    /// to answer with prose alone.
    pub fn prompt(&self) -> String {
        match self {
            Self::RemoveBackground => "Act as an expert image editor. Remove the background \
                entirely. Keep only the main subject, unchanged, on a fully transparent \
                background. Output ONLY the resulting PNG image, with no text."
                .to_string(),
            Self::ReplaceBackground(scene) => format!(
                "Act as an expert image editor. Keep the main subject exactly as it is, but \
                replace the background with {}. Match the lighting on the subject to the new \
                background. Output ONLY the resulting PNG image, with no text.",
                scene
            ),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::RemoveBackground => "remove_background",
            Self::ReplaceBackground(_) => "replace_background",
        }
    }
}
