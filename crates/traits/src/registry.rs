//! FontRegistry trait for abstracting the engine's font table.
//!
//! The rendering engine keeps one process-wide table of registered fonts.
//! Modelling it as an injected capability keeps composition code off global
//! state and lets tests substitute a fake registry.

use std::fmt::Debug;
use std::path::Path;
use thiserror::Error;

/// Error type for font registration operations.
#[derive(Error, Debug, Clone)]
pub enum RegistryError {
    #[error("Failed to load font '{name}' from '{path}': {message}")]
    LoadFailed {
        name: String,
        path: String,
        message: String,
    },

    #[error("Font data for '{0}' is not usable")]
    InvalidFont(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// The rendering engine's font table.
///
/// The table is append-only and idempotent: registering a name that is
/// already present is the caller's no-op to detect via [`contains`], and
/// registrations are never removed.
///
/// [`contains`]: FontRegistry::contains
pub trait FontRegistry: Send + Sync + Debug {
    /// Register a font file under a logical name.
    ///
    /// # Errors
    ///
    /// Fails when the font data cannot be read or is unusable. A failed
    /// registration leaves the table unchanged.
    fn register(&self, name: &str, path: &Path) -> Result<(), RegistryError>;

    /// Check whether a logical name is already registered.
    fn contains(&self, name: &str) -> bool;

    /// Returns a human-readable name for this registry (for logging).
    fn name(&self) -> &'static str;
}
