//! Document configuration.

use crate::error::BuildError;
use crate::fontspec::FontSpec;
use folio_types::PageSize;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_image_max_height() -> f32 {
    300.0
}

/// Configuration for one document build.
///
/// Strictly validated: unknown fields are rejected at deserialization and
/// every font entry runs full [`FontSpec`] validation. Treat instances as
/// immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocConfig {
    /// Destination file for the generated PDF. Parent directories are
    /// created on build.
    pub output_path: PathBuf,

    /// Page size in points. Defaults to A4 portrait.
    #[serde(default)]
    pub page_size: PageSize,

    /// Fonts to register with the engine before rendering.
    #[serde(default)]
    pub fonts: Vec<FontSpec>,

    /// Optional font name override for the "Title" style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_font: Option<String>,

    /// Optional font name override for the "BodyText" style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_font: Option<String>,

    /// Maximum height of inline images in points. Must be > 0.
    #[serde(default = "default_image_max_height")]
    pub image_max_height: f32,
}

impl DocConfig {
    /// A config with defaults for everything but the output path.
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            page_size: PageSize::default(),
            fonts: Vec::new(),
            title_font: None,
            body_font: None,
            image_max_height: default_image_max_height(),
        }
    }

    /// Checks constraints serde cannot express.
    pub fn validate(&self) -> Result<(), BuildError> {
        // The negated comparison also rejects NaN.
        if !(self.image_max_height > 0.0) {
            return Err(BuildError::Config(format!(
                "imageMaxHeight must be > 0, got {}",
                self.image_max_height
            )));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(BuildError::Config("outputPath must not be empty".to_string()));
        }
        Ok(())
    }

    /// Deserializes and validates a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        let config: DocConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_config_gets_defaults() {
        let config = DocConfig::from_json(r#"{"outputPath":"out/report.pdf"}"#).unwrap();
        assert_eq!(config.output_path, PathBuf::from("out/report.pdf"));
        assert_eq!(config.page_size, PageSize::A4);
        assert!(config.fonts.is_empty());
        assert_eq!(config.image_max_height, 300.0);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = DocConfig::from_json(r#"{"outputPath":"a.pdf","watermark":"draft"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_positive_image_height_is_rejected() {
        let json = json!({"outputPath": "a.pdf", "imageMaxHeight": 0.0}).to_string();
        let result = DocConfig::from_json(&json);
        assert!(matches!(result, Err(BuildError::Config(_))));
    }

    #[test]
    fn test_page_size_names() {
        let json = json!({"outputPath": "a.pdf", "pageSize": "letter"}).to_string();
        let config = DocConfig::from_json(&json).unwrap();
        assert_eq!(config.page_size, PageSize::Letter);
    }

    #[test]
    fn test_invalid_font_entry_fails_deserialization() {
        let json = json!({
            "outputPath": "a.pdf",
            "fonts": [{"name": "Ghost-Font", "path": "/no/such/font.ttf"}]
        })
        .to_string();
        assert!(DocConfig::from_json(&json).is_err());
    }

    #[test]
    fn test_empty_output_path_is_rejected() {
        let result = DocConfig::new("").validate();
        assert!(matches!(result, Err(BuildError::Config(_))));
    }
}
