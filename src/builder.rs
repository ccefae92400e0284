//! Document build orchestration.

use crate::config::DocConfig;
use crate::error::BuildError;
use crate::register::register_fonts;
use crate::story::{ImageRequest, StoryRequest, build_story};
use folio_flow::Flowable;
use folio_style::{OverrideOptions, StyleOverrides, StyleSheet};
use log::{debug, error, info};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

/// Content inputs for one document build.
#[derive(Debug, Clone, Default)]
pub struct DocumentRequest {
    pub title: String,
    pub body: String,
    /// Optional image path; silently skipped (with a warning) if unusable.
    pub image_path: Option<PathBuf>,
    /// Flowables to prepend to the story.
    pub prepend: Vec<Flowable>,
    /// Flowables to append to the story.
    pub append: Vec<Flowable>,
}

impl DocumentRequest {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            ..Default::default()
        }
    }
}

/// Builds one PDF document: ensures the output directory exists, registers
/// the configured fonts, derives styles, composes the story, and invokes
/// the rendering engine.
///
/// Returns the output path on success.
///
/// # Errors
///
/// Fails on invalid configuration, output directory I/O errors, a missing
/// required or parent style, or an engine failure — the last is logged
/// with full detail and wrapped as [`BuildError::Render`] naming the
/// output path.
pub fn build_document(
    config: &DocConfig,
    registry: &dyn folio_traits::FontRegistry,
    engine: &dyn folio_traits::RenderEngine,
    request: DocumentRequest,
) -> Result<PathBuf, BuildError> {
    config.validate()?;

    if let Some(parent) = config.output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
        debug!("Ensured output directory exists: {}", parent.display());
    }

    let report = register_fonts(registry, &config.fonts);
    debug!("Font registration via {}: {:?}", registry.name(), report);

    let styles = StyleSheet::builtin()
        .apply_overrides(&font_overrides(config), &OverrideOptions::default())?;

    let mut story_request = StoryRequest::new(request.title, request.body);
    story_request.prepend = request.prepend;
    story_request.append = request.append;
    story_request.image = request
        .image_path
        .map(|path| ImageRequest::new(path, config.image_max_height));

    let story = build_story(&styles, story_request)?;
    info!(
        "Composed story with {} flowables; rendering via {}",
        story.len(),
        engine.name()
    );

    engine
        .build(&story, &config.page_size, &config.output_path)
        .map_err(|e| {
            error!("Failed to build PDF at {}: {}", config.output_path.display(), e);
            BuildError::Render { path: config.output_path.clone(), source: e }
        })?;

    info!("PDF generated: {}", config.output_path.display());
    Ok(config.output_path.clone())
}

/// Turns the config's title/body font overrides into a style override map.
fn font_overrides(config: &DocConfig) -> StyleOverrides {
    let mut overrides = StyleOverrides::new();
    if let Some(font) = &config.title_font {
        overrides
            .entry("Title".to_string())
            .or_default()
            .insert("fontName".to_string(), Value::String(font.clone()));
    }
    if let Some(font) = &config.body_font {
        overrides
            .entry("BodyText".to_string())
            .or_default()
            .insert("fontName".to_string(), Value::String(font.clone()));
    }
    overrides
}
