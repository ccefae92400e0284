//! Font registry implementations for the folio composition layer.
//!
//! This crate provides concrete implementations of the `FontRegistry`
//! trait from folio-traits.
//!
//! ## Available Registries
//!
//! - [`InMemoryFontRegistry`]: Holds registered font data in process memory

mod in_memory;

pub use in_memory::InMemoryFontRegistry;
