//! Defines the unified error type for document build operations.

use crate::fontspec::FontSpecError;
use folio_style::StyleError;
use folio_traits::EngineError;
use std::path::PathBuf;
use thiserror::Error;

/// The main error enum for high-level document building.
///
/// Soft conditions (duplicate fonts, unusable images, unknown style
/// attributes) never surface here; they are logged and skipped at the point
/// of occurrence. What remains is configuration validation, I/O, and a
/// single wrapped rendering failure.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Font specification error: {0}")]
    FontSpec(#[from] FontSpecError),

    #[error("Stylesheet error: {0}")]
    Style(#[from] StyleError),

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to build PDF: {}", .path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: EngineError,
    },
}
