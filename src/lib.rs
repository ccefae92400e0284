//! folio: a composition layer for PDF document generation.
//!
//! This crate validates font assets, builds paragraph styles, scales
//! images, and assembles an ordered flowable sequence (a "story") that an
//! injected external rendering engine turns into a PDF file. No rendering,
//! text layout or PDF encoding happens here.
//!
//! The typical flow mirrors [`build_document`]:
//!
//! 1. validate fonts ([`FontSpec`]) and register them ([`register_fonts`])
//! 2. derive a stylesheet from the built-in base with whitelisted
//!    overrides ([`StyleSheet::apply_overrides`])
//! 3. compose the story ([`build_story`]), optionally with a scaled image
//! 4. hand the story to the engine ([`RenderEngine`])

pub mod builder;
pub mod config;
pub mod error;
pub mod fontspec;
pub mod image;
pub mod register;
pub mod story;

pub use self::builder::{DocumentRequest, build_document};
pub use self::config::DocConfig;
pub use self::error::BuildError;
pub use self::fontspec::{FontSpec, FontSpecError};
pub use self::image::{ImageOutcome, SkipReason, scaled_image};
pub use self::register::{RegistrationReport, register_fonts};
pub use self::story::{ImageRequest, Spacing, StoryRequest, build_story};

pub use folio_flow::Flowable;
pub use folio_registry::InMemoryFontRegistry;
pub use folio_style::{
    Alignment, ColorValue, OverrideOptions, ParagraphStyle, StyleError, StyleOverrides, StyleSheet,
};
pub use folio_traits::{EngineError, FontRegistry, RegistryError, RenderEngine};
pub use folio_types::{Color, PageSize, Size, units};
