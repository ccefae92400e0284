//! Validated font specifications.
//!
//! A [`FontSpec`] pairs a logical font name with the path of a
//! TrueType/OpenType font file. Construction validates the pair: the path
//! is normalized (`~` expanded, symlinks and relative segments resolved)
//! and must point at an existing regular file with a supported extension.
//! Once constructed, a spec is immutable.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extensions accepted for font files, lowercase.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];

/// Minimum length for a logical font name.
pub const MIN_NAME_LEN: usize = 5;

/// Error type for font specification validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FontSpecError {
    #[error("Font name '{0}' is too short (minimum {MIN_NAME_LEN} characters)")]
    NameTooShort(String),

    #[error("Font file does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Path is not a file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("Unsupported font extension '{ext}' for '{}'. Allowed: ttf, otf, ttc", .path.display())]
    UnsupportedExtension { ext: String, path: PathBuf },
}

/// A validated specification of a font to register with the rendering
/// engine.
///
/// The stored path is absolute with symlinks resolved, so specs stay
/// unambiguous across working directories and CI environments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFontSpec", into = "RawFontSpec")]
pub struct FontSpec {
    name: String,
    path: PathBuf,
}

impl FontSpec {
    /// Validates and normalizes a font name and path.
    pub fn new(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self, FontSpecError> {
        let name = name.into();
        if name.chars().count() < MIN_NAME_LEN {
            return Err(FontSpecError::NameTooShort(name));
        }

        let expanded = expand_home(path.as_ref());
        let normalized = expanded
            .canonicalize()
            .map_err(|_| FontSpecError::NotFound(expanded.clone()))?;

        if !normalized.is_file() {
            return Err(FontSpecError::NotAFile(normalized));
        }

        let ext = normalized
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(FontSpecError::UnsupportedExtension { ext, path: normalized });
        }

        Ok(Self { name, path: normalized })
    }

    /// The logical name the font registers under (used in `fontName`
    /// style attributes).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The normalized, absolute font file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Expands a leading `~` to the current user's home directory.
///
/// Only the bare `~` form is expanded; `~user/...` paths are left
/// untouched and fail validation as nonexistent unless such a path
/// literally exists.
fn expand_home(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    path.to_path_buf()
}

/// Wire form of a font spec; conversion into [`FontSpec`] runs the full
/// validation, so deserialized configs cannot bypass it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFontSpec {
    name: String,
    path: PathBuf,
}

impl TryFrom<RawFontSpec> for FontSpec {
    type Error = FontSpecError;

    fn try_from(raw: RawFontSpec) -> Result<Self, Self::Error> {
        FontSpec::new(raw.name, raw.path)
    }
}

impl From<FontSpec> for RawFontSpec {
    fn from(spec: FontSpec) -> Self {
        RawFontSpec { name: spec.name, path: spec.path }
    }
}
