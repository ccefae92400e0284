//! RenderEngine trait for abstracting the external document builder.
//!
//! This layer composes stories; producing PDF bytes is entirely the
//! engine's job. The trait is the seam where a real backend (or a test
//! fake) is injected.

use folio_flow::Flowable;
use folio_types::PageSize;
use std::fmt::Debug;
use std::path::Path;
use thiserror::Error;

/// Error type for document rendering.
#[derive(Error, Debug, Clone)]
pub enum EngineError {
    #[error("Rendering failed: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::Io(err.to_string())
    }
}

/// An external document-building engine.
///
/// Consumes an ordered flowable sequence and a page size and produces a PDF
/// file at the given path. Implementations own all text layout, font
/// rasterization and PDF encoding.
pub trait RenderEngine: Send + Sync + Debug {
    /// Render the story to `output`.
    fn build(
        &self,
        story: &[Flowable],
        page_size: &PageSize,
        output: &Path,
    ) -> Result<(), EngineError>;

    /// Returns a human-readable name for this engine (for logging).
    fn name(&self) -> &'static str;
}
