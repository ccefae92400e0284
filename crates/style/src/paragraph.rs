//! Named paragraph style definitions.

use crate::align::Alignment;
use folio_types::Color;
use serde::{Deserialize, Serialize};

/// A color attribute value.
///
/// Colors supplied as hex strings are parsed eagerly; strings the engine may
/// understand but this layer cannot parse (named colors, for instance) are
/// kept verbatim and passed through.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ColorValue {
    Color(Color),
    Raw(String),
}

impl ColorValue {
    /// Interprets a string as a hex color, prefixing `#` if absent.
    ///
    /// Falls back to the raw string when hex parsing fails.
    pub fn parse(s: &str) -> Self {
        match Color::from_hex(s) {
            Ok(color) => ColorValue::Color(color),
            Err(_) => ColorValue::Raw(s.to_string()),
        }
    }

    pub fn black() -> Self {
        ColorValue::Color(Color::default())
    }
}

/// A named bundle of text-formatting attributes for paragraph-like elements.
///
/// All measurements are in points. Styles are plain data; sharing across a
/// story happens through `Arc<ParagraphStyle>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStyle {
    pub name: String,
    pub font_name: String,
    pub font_size: f32,
    pub leading: f32,
    pub text_color: ColorValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_color: Option<ColorValue>,
    pub alignment: Alignment,
    pub space_before: f32,
    pub space_after: f32,
    pub left_indent: f32,
    pub right_indent: f32,
    pub first_line_indent: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_wrap: Option<String>,
    pub kerning: f32,
    pub tracking: f32,
    pub underline_width: f32,
    pub underline_offset: f32,
}

impl ParagraphStyle {
    /// Creates a style with the engine's default paragraph metrics.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            font_name: "Helvetica".to_string(),
            font_size: 10.0,
            leading: 12.0,
            text_color: ColorValue::black(),
            back_color: None,
            alignment: Alignment::Left,
            space_before: 0.0,
            space_after: 0.0,
            left_indent: 0.0,
            right_indent: 0.0,
            first_line_indent: 0.0,
            word_wrap: None,
            kerning: 0.0,
            tracking: 0.0,
            underline_width: 1.0,
            underline_offset: 0.0,
        }
    }

    /// Creates a new style inheriting every attribute from `parent`.
    pub fn derived(name: impl Into<String>, parent: &ParagraphStyle) -> Self {
        let mut style = parent.clone();
        style.name = name.into();
        style
    }
}
