//! The flowable model: the in-memory representation of story elements
//! handed to the rendering engine, after composition but before rendering.

use folio_style::ParagraphStyle;
use std::path::PathBuf;
use std::sync::Arc;

/// A unit of renderable document content.
///
/// Flowables are opaque to this layer beyond construction; the engine
/// consumes them in sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Flowable {
    /// A styled run of paragraph text.
    Paragraph {
        text: String,
        style: Arc<ParagraphStyle>,
    },
    /// Fixed vertical whitespace, in points.
    Spacer { width: f32, height: f32 },
    /// An image placed at the given display size, in points.
    Image {
        path: PathBuf,
        width: f32,
        height: f32,
    },
    /// A group the engine must keep on one page to avoid orphaning.
    KeepTogether(Vec<Flowable>),
}

impl Flowable {
    pub fn paragraph(text: impl Into<String>, style: Arc<ParagraphStyle>) -> Self {
        Flowable::Paragraph { text: text.into(), style }
    }

    /// A spacer of the given height with unit width, the conventional shape
    /// for inter-paragraph gaps.
    pub fn spacer(height: f32) -> Self {
        Flowable::Spacer { width: 1.0, height }
    }

    pub fn image(path: impl Into<PathBuf>, width: f32, height: f32) -> Self {
        Flowable::Image { path: path.into(), width, height }
    }

    /// Returns a string identifier for the flowable type, for logs and
    /// assertions.
    pub fn kind(&self) -> &'static str {
        match self {
            Flowable::Paragraph { .. } => "paragraph",
            Flowable::Spacer { .. } => "spacer",
            Flowable::Image { .. } => "image",
            Flowable::KeepTogether(_) => "keep-together",
        }
    }
}
