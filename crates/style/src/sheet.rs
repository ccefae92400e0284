//! The stylesheet: a named collection of paragraph styles with
//! whitelist-checked override application.

use crate::attr::{AttrKind, StyleAttr};
use crate::paragraph::ParagraphStyle;
use log::{debug, info, warn};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Mapping of `style name -> { attribute name -> raw value }`.
///
/// Values are raw JSON so that override maps can come straight from config
/// files; validation happens against the [`AttrKind`] whitelist at apply
/// time.
pub type StyleOverrides = HashMap<String, HashMap<String, Value>>;

/// Error type for stylesheet operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("Required style '{0}' not found in stylesheet")]
    MissingStyle(String),

    #[error("Parent style '{parent}' not found; cannot create new style '{style}'")]
    MissingParent { parent: String, style: String },
}

/// Controls how overrides treat style names absent from the sheet.
#[derive(Debug, Clone)]
pub struct OverrideOptions {
    /// Create missing styles instead of skipping them.
    pub create_missing: bool,
    /// Name of the existing style newly created styles inherit from.
    pub parent_for_new: String,
}

impl Default for OverrideOptions {
    fn default() -> Self {
        Self {
            create_missing: true,
            parent_for_new: "Normal".to_string(),
        }
    }
}

/// A named collection of paragraph styles.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    styles: HashMap<String, Arc<ParagraphStyle>>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in base sheet, modelled on the rendering engine's sample
    /// stylesheet: Normal, BodyText, Italic, Title and three heading levels
    /// on Helvetica metrics.
    pub fn builtin() -> Self {
        let mut sheet = Self::new();

        let normal = ParagraphStyle::new("Normal");

        let mut body = ParagraphStyle::derived("BodyText", &normal);
        body.space_before = 6.0;

        let mut italic = ParagraphStyle::derived("Italic", &body);
        italic.font_name = "Helvetica-Oblique".to_string();

        let mut title = ParagraphStyle::derived("Title", &normal);
        title.font_name = "Helvetica-Bold".to_string();
        title.font_size = 18.0;
        title.leading = 22.0;
        title.alignment = crate::align::Alignment::Center;
        title.space_after = 6.0;

        let mut h1 = ParagraphStyle::derived("Heading1", &normal);
        h1.font_name = "Helvetica-Bold".to_string();
        h1.font_size = 18.0;
        h1.leading = 22.0;
        h1.space_before = 12.0;
        h1.space_after = 6.0;

        let mut h2 = ParagraphStyle::derived("Heading2", &normal);
        h2.font_name = "Helvetica-Bold".to_string();
        h2.font_size = 14.0;
        h2.leading = 18.0;
        h2.space_before = 12.0;
        h2.space_after = 6.0;

        let mut h3 = ParagraphStyle::derived("Heading3", &normal);
        h3.font_name = "Helvetica-BoldOblique".to_string();
        h3.font_size = 12.0;
        h3.leading = 14.0;
        h3.space_before = 12.0;
        h3.space_after = 6.0;

        for style in [normal, body, italic, title, h1, h2, h3] {
            sheet.add(style);
        }
        sheet
    }

    /// Adds a style, replacing any existing style of the same name.
    pub fn add(&mut self, style: ParagraphStyle) {
        self.styles.insert(style.name.clone(), Arc::new(style));
    }

    pub fn get(&self, name: &str) -> Option<&Arc<ParagraphStyle>> {
        self.styles.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Fetches a style, or fails naming the missing style.
    pub fn require(&self, name: &str) -> Result<&Arc<ParagraphStyle>, StyleError> {
        self.styles
            .get(name)
            .ok_or_else(|| StyleError::MissingStyle(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Iterates over style names (unordered).
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// Returns a new sheet with the overrides applied. `self` is never
    /// mutated; untouched styles stay shared.
    ///
    /// Per style name: missing styles are created from
    /// `opts.parent_for_new` (erroring if that parent is itself missing) or
    /// skipped with a warning, depending on `opts.create_missing`. Per
    /// attribute: unknown names, mismatched value types and unrecognized
    /// alignments are skipped with a warning; values equal to the current
    /// setting are skipped with a debug note; everything else is set and
    /// logged.
    pub fn apply_overrides(
        &self,
        overrides: &StyleOverrides,
        opts: &OverrideOptions,
    ) -> Result<StyleSheet, StyleError> {
        let mut sheet = self.clone();
        if overrides.is_empty() {
            return Ok(sheet);
        }

        for (style_name, attrs) in overrides {
            let mut style = match sheet.styles.get(style_name) {
                Some(existing) => (**existing).clone(),
                None if opts.create_missing => {
                    let parent = sheet.styles.get(&opts.parent_for_new).ok_or_else(|| {
                        StyleError::MissingParent {
                            parent: opts.parent_for_new.clone(),
                            style: style_name.clone(),
                        }
                    })?;
                    info!(
                        "Created new style '{}' inheriting from '{}'",
                        style_name, opts.parent_for_new
                    );
                    ParagraphStyle::derived(style_name.clone(), parent)
                }
                None => {
                    warn!("Style '{}' not found; skipping overrides", style_name);
                    continue;
                }
            };

            apply_attr_overrides(&mut style, attrs);
            sheet.styles.insert(style_name.clone(), Arc::new(style));
        }

        Ok(sheet)
    }
}

fn apply_attr_overrides(style: &mut ParagraphStyle, attrs: &HashMap<String, Value>) {
    for (key, raw_value) in attrs {
        let Some(kind) = AttrKind::parse(key) else {
            warn!(
                "Attribute '{}' is not allowed; skipping for style '{}'",
                key, style.name
            );
            continue;
        };

        let attr = match StyleAttr::from_value(kind, raw_value) {
            Ok(attr) => attr,
            Err(message) => {
                warn!("Skipping attribute for style '{}': {}", style.name, message);
                continue;
            }
        };

        if attr.matches_current(style) {
            debug!(
                "Style '{}': '{}' already set to {:?}; skipping",
                style.name, key, raw_value
            );
            continue;
        }

        info!("Style '{}': set '{}' to {:?}", style.name, key, raw_value);
        attr.apply(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::Alignment;
    use crate::paragraph::ColorValue;
    use folio_types::Color;
    use serde_json::json;

    fn overrides(style: &str, attrs: &[(&str, Value)]) -> StyleOverrides {
        let mut map = HashMap::new();
        map.insert(
            style.to_string(),
            attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        );
        map
    }

    #[test]
    fn test_builtin_has_required_styles() {
        let sheet = StyleSheet::builtin();
        for name in ["Normal", "BodyText", "Title", "Heading1", "Heading2", "Heading3", "Italic"] {
            assert!(sheet.contains(name), "missing builtin style {}", name);
        }
    }

    #[test]
    fn test_override_sets_attribute() {
        let base = StyleSheet::builtin();
        let out = base
            .apply_overrides(
                &overrides("Title", &[("fontName", json!("Inter-Bold")), ("fontSize", json!(20))]),
                &OverrideOptions::default(),
            )
            .unwrap();

        let title = out.require("Title").unwrap();
        assert_eq!(title.font_name, "Inter-Bold");
        assert_eq!(title.font_size, 20.0);
    }

    #[test]
    fn test_base_sheet_is_never_mutated() {
        let base = StyleSheet::builtin();
        let original_font = base.require("Title").unwrap().font_name.clone();

        let _ = base
            .apply_overrides(
                &overrides("Title", &[("fontName", json!("Changed"))]),
                &OverrideOptions::default(),
            )
            .unwrap();

        assert_eq!(base.require("Title").unwrap().font_name, original_font);
    }

    #[test]
    fn test_unknown_attribute_is_skipped() {
        let base = StyleSheet::builtin();
        let out = base
            .apply_overrides(
                &overrides("BodyText", &[("bulletFontName", json!("Courier"))]),
                &OverrideOptions::default(),
            )
            .unwrap();

        // Style otherwise unchanged.
        assert_eq!(out.require("BodyText").unwrap(), base.require("BodyText").unwrap());
    }

    #[test]
    fn test_type_mismatch_is_skipped() {
        let base = StyleSheet::builtin();
        let out = base
            .apply_overrides(
                &overrides("BodyText", &[("fontSize", json!("twelve"))]),
                &OverrideOptions::default(),
            )
            .unwrap();

        assert_eq!(
            out.require("BodyText").unwrap().font_size,
            base.require("BodyText").unwrap().font_size
        );
    }

    #[test]
    fn test_invalid_alignment_keeps_existing_value() {
        let base = StyleSheet::builtin();
        let out = base
            .apply_overrides(
                &overrides("Title", &[("alignment", json!(3))]),
                &OverrideOptions::default(),
            )
            .unwrap();

        assert_eq!(out.require("Title").unwrap().alignment, Alignment::Center);
    }

    #[test]
    fn test_idempotent_override_is_a_no_op() {
        let base = StyleSheet::builtin();
        let current_size = base.require("Normal").unwrap().font_size;
        let out = base
            .apply_overrides(
                &overrides("Normal", &[("fontSize", json!(current_size))]),
                &OverrideOptions::default(),
            )
            .unwrap();

        assert_eq!(out.require("Normal").unwrap(), base.require("Normal").unwrap());
    }

    #[test]
    fn test_hex_color_override() {
        let base = StyleSheet::builtin();
        let out = base
            .apply_overrides(
                &overrides("BodyText", &[("textColor", json!("222222"))]),
                &OverrideOptions::default(),
            )
            .unwrap();

        assert_eq!(
            out.require("BodyText").unwrap().text_color,
            ColorValue::Color(Color::gray(0x22))
        );
    }

    #[test]
    fn test_missing_style_is_created_from_parent() {
        let base = StyleSheet::builtin();
        let out = base
            .apply_overrides(
                &overrides("Footer", &[("fontSize", json!(8))]),
                &OverrideOptions::default(),
            )
            .unwrap();

        let footer = out.require("Footer").unwrap();
        assert_eq!(footer.font_size, 8.0);
        // Inherited from Normal.
        assert_eq!(footer.font_name, "Helvetica");
        assert!(!base.contains("Footer"));
    }

    #[test]
    fn test_missing_style_skipped_when_creation_disabled() {
        let base = StyleSheet::builtin();
        let opts = OverrideOptions {
            create_missing: false,
            ..OverrideOptions::default()
        };
        let out = base
            .apply_overrides(&overrides("Footer", &[("fontSize", json!(8))]), &opts)
            .unwrap();

        assert!(!out.contains("Footer"));
    }

    #[test]
    fn test_missing_parent_is_an_error() {
        let base = StyleSheet::builtin();
        let opts = OverrideOptions {
            create_missing: true,
            parent_for_new: "NoSuchParent".to_string(),
        };
        let err = base
            .apply_overrides(&overrides("Footer", &[("fontSize", json!(8))]), &opts)
            .unwrap_err();

        assert_eq!(
            err,
            StyleError::MissingParent {
                parent: "NoSuchParent".to_string(),
                style: "Footer".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_overrides_return_equivalent_sheet() {
        let base = StyleSheet::builtin();
        let out = base
            .apply_overrides(&StyleOverrides::new(), &OverrideOptions::default())
            .unwrap();
        assert_eq!(out.len(), base.len());
    }

    #[test]
    fn test_require_names_missing_style() {
        let sheet = StyleSheet::new();
        assert_eq!(
            sheet.require("Title"),
            Err(StyleError::MissingStyle("Title".to_string()))
        );
    }
}
