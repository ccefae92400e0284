//! The fixed whitelist of overridable style attributes.
//!
//! Override maps arrive as dynamic JSON data (attribute name to value).
//! Rather than reflecting over field names, each whitelisted attribute is an
//! `AttrKind` variant with an expected value shape; validation is an
//! exhaustive match from raw value to a typed [`StyleAttr`].

use crate::align::Alignment;
use crate::paragraph::{ColorValue, ParagraphStyle};
use folio_types::Color;
use serde_json::Value;

/// Every attribute name an override map may set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrKind {
    FontName,
    FontSize,
    Leading,
    TextColor,
    BackColor,
    Alignment,
    SpaceBefore,
    SpaceAfter,
    LeftIndent,
    RightIndent,
    FirstLineIndent,
    WordWrap,
    Kerning,
    Tracking,
    UnderlineWidth,
    UnderlineOffset,
}

impl AttrKind {
    /// Looks up an attribute by its camelCase wire name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "fontName" => Some(AttrKind::FontName),
            "fontSize" => Some(AttrKind::FontSize),
            "leading" => Some(AttrKind::Leading),
            "textColor" => Some(AttrKind::TextColor),
            "backColor" => Some(AttrKind::BackColor),
            "alignment" => Some(AttrKind::Alignment),
            "spaceBefore" => Some(AttrKind::SpaceBefore),
            "spaceAfter" => Some(AttrKind::SpaceAfter),
            "leftIndent" => Some(AttrKind::LeftIndent),
            "rightIndent" => Some(AttrKind::RightIndent),
            "firstLineIndent" => Some(AttrKind::FirstLineIndent),
            "wordWrap" => Some(AttrKind::WordWrap),
            "kerning" => Some(AttrKind::Kerning),
            "tracking" => Some(AttrKind::Tracking),
            "underlineWidth" => Some(AttrKind::UnderlineWidth),
            "underlineOffset" => Some(AttrKind::UnderlineOffset),
            _ => None,
        }
    }

    /// The camelCase wire name for this attribute.
    pub fn name(&self) -> &'static str {
        match self {
            AttrKind::FontName => "fontName",
            AttrKind::FontSize => "fontSize",
            AttrKind::Leading => "leading",
            AttrKind::TextColor => "textColor",
            AttrKind::BackColor => "backColor",
            AttrKind::Alignment => "alignment",
            AttrKind::SpaceBefore => "spaceBefore",
            AttrKind::SpaceAfter => "spaceAfter",
            AttrKind::LeftIndent => "leftIndent",
            AttrKind::RightIndent => "rightIndent",
            AttrKind::FirstLineIndent => "firstLineIndent",
            AttrKind::WordWrap => "wordWrap",
            AttrKind::Kerning => "kerning",
            AttrKind::Tracking => "tracking",
            AttrKind::UnderlineWidth => "underlineWidth",
            AttrKind::UnderlineOffset => "underlineOffset",
        }
    }

    /// Human-readable description of the accepted value shape, for warnings.
    pub fn expected(&self) -> &'static str {
        match self {
            AttrKind::FontName | AttrKind::WordWrap => "string",
            AttrKind::TextColor | AttrKind::BackColor => "color or hex string",
            AttrKind::Alignment => "alignment code (0/1/2/4) or name",
            _ => "number",
        }
    }
}

/// A validated, typed attribute value ready to apply to a style.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleAttr {
    FontName(String),
    FontSize(f32),
    Leading(f32),
    TextColor(ColorValue),
    BackColor(ColorValue),
    Alignment(Alignment),
    SpaceBefore(f32),
    SpaceAfter(f32),
    LeftIndent(f32),
    RightIndent(f32),
    FirstLineIndent(f32),
    WordWrap(String),
    Kerning(f32),
    Tracking(f32),
    UnderlineWidth(f32),
    UnderlineOffset(f32),
}

fn as_number(kind: AttrKind, value: &Value) -> Result<f32, String> {
    value.as_f64().map(|n| n as f32).ok_or_else(|| {
        format!(
            "expected {} for '{}', got {}",
            kind.expected(),
            kind.name(),
            type_name(value)
        )
    })
}

fn as_string(kind: AttrKind, value: &Value) -> Result<String, String> {
    value.as_str().map(str::to_string).ok_or_else(|| {
        format!(
            "expected {} for '{}', got {}",
            kind.expected(),
            kind.name(),
            type_name(value)
        )
    })
}

fn as_color(kind: AttrKind, value: &Value) -> Result<ColorValue, String> {
    match value {
        // Hex parsing with raw-string fallback.
        Value::String(s) => Ok(ColorValue::parse(s)),
        Value::Object(_) => serde_json::from_value::<Color>(value.clone())
            .map(ColorValue::Color)
            .map_err(|e| format!("invalid color for '{}': {}", kind.name(), e)),
        _ => Err(format!(
            "expected {} for '{}', got {}",
            kind.expected(),
            kind.name(),
            type_name(value)
        )),
    }
}

fn as_alignment(value: &Value) -> Result<Alignment, String> {
    match value {
        Value::Number(n) => {
            let code = n
                .as_i64()
                .ok_or_else(|| format!("alignment code must be an integer, got {}", n))?;
            Alignment::from_code(code)
                .ok_or_else(|| format!("alignment code '{}' not allowed", code))
        }
        Value::String(s) => {
            Alignment::parse(s).ok_or_else(|| format!("alignment '{}' not allowed", s))
        }
        _ => Err(format!(
            "expected alignment code or name, got {}",
            type_name(value)
        )),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl StyleAttr {
    /// Validates a raw override value against the whitelist entry for `kind`.
    pub fn from_value(kind: AttrKind, value: &Value) -> Result<StyleAttr, String> {
        match kind {
            AttrKind::FontName => as_string(kind, value).map(StyleAttr::FontName),
            AttrKind::FontSize => as_number(kind, value).map(StyleAttr::FontSize),
            AttrKind::Leading => as_number(kind, value).map(StyleAttr::Leading),
            AttrKind::TextColor => as_color(kind, value).map(StyleAttr::TextColor),
            AttrKind::BackColor => as_color(kind, value).map(StyleAttr::BackColor),
            AttrKind::Alignment => as_alignment(value).map(StyleAttr::Alignment),
            AttrKind::SpaceBefore => as_number(kind, value).map(StyleAttr::SpaceBefore),
            AttrKind::SpaceAfter => as_number(kind, value).map(StyleAttr::SpaceAfter),
            AttrKind::LeftIndent => as_number(kind, value).map(StyleAttr::LeftIndent),
            AttrKind::RightIndent => as_number(kind, value).map(StyleAttr::RightIndent),
            AttrKind::FirstLineIndent => {
                as_number(kind, value).map(StyleAttr::FirstLineIndent)
            }
            AttrKind::WordWrap => as_string(kind, value).map(StyleAttr::WordWrap),
            AttrKind::Kerning => as_number(kind, value).map(StyleAttr::Kerning),
            AttrKind::Tracking => as_number(kind, value).map(StyleAttr::Tracking),
            AttrKind::UnderlineWidth => as_number(kind, value).map(StyleAttr::UnderlineWidth),
            AttrKind::UnderlineOffset => {
                as_number(kind, value).map(StyleAttr::UnderlineOffset)
            }
        }
    }

    /// The whitelist entry this value belongs to.
    pub fn kind(&self) -> AttrKind {
        match self {
            StyleAttr::FontName(_) => AttrKind::FontName,
            StyleAttr::FontSize(_) => AttrKind::FontSize,
            StyleAttr::Leading(_) => AttrKind::Leading,
            StyleAttr::TextColor(_) => AttrKind::TextColor,
            StyleAttr::BackColor(_) => AttrKind::BackColor,
            StyleAttr::Alignment(_) => AttrKind::Alignment,
            StyleAttr::SpaceBefore(_) => AttrKind::SpaceBefore,
            StyleAttr::SpaceAfter(_) => AttrKind::SpaceAfter,
            StyleAttr::LeftIndent(_) => AttrKind::LeftIndent,
            StyleAttr::RightIndent(_) => AttrKind::RightIndent,
            StyleAttr::FirstLineIndent(_) => AttrKind::FirstLineIndent,
            StyleAttr::WordWrap(_) => AttrKind::WordWrap,
            StyleAttr::Kerning(_) => AttrKind::Kerning,
            StyleAttr::Tracking(_) => AttrKind::Tracking,
            StyleAttr::UnderlineWidth(_) => AttrKind::UnderlineWidth,
            StyleAttr::UnderlineOffset(_) => AttrKind::UnderlineOffset,
        }
    }

    /// True when the style already carries this exact value.
    pub fn matches_current(&self, style: &ParagraphStyle) -> bool {
        match self {
            StyleAttr::FontName(v) => style.font_name == *v,
            StyleAttr::FontSize(v) => style.font_size == *v,
            StyleAttr::Leading(v) => style.leading == *v,
            StyleAttr::TextColor(v) => style.text_color == *v,
            StyleAttr::BackColor(v) => style.back_color.as_ref() == Some(v),
            StyleAttr::Alignment(v) => style.alignment == *v,
            StyleAttr::SpaceBefore(v) => style.space_before == *v,
            StyleAttr::SpaceAfter(v) => style.space_after == *v,
            StyleAttr::LeftIndent(v) => style.left_indent == *v,
            StyleAttr::RightIndent(v) => style.right_indent == *v,
            StyleAttr::FirstLineIndent(v) => style.first_line_indent == *v,
            StyleAttr::WordWrap(v) => style.word_wrap.as_deref() == Some(v.as_str()),
            StyleAttr::Kerning(v) => style.kerning == *v,
            StyleAttr::Tracking(v) => style.tracking == *v,
            StyleAttr::UnderlineWidth(v) => style.underline_width == *v,
            StyleAttr::UnderlineOffset(v) => style.underline_offset == *v,
        }
    }

    /// Writes this value into the style.
    pub fn apply(self, style: &mut ParagraphStyle) {
        match self {
            StyleAttr::FontName(v) => style.font_name = v,
            StyleAttr::FontSize(v) => style.font_size = v,
            StyleAttr::Leading(v) => style.leading = v,
            StyleAttr::TextColor(v) => style.text_color = v,
            StyleAttr::BackColor(v) => style.back_color = Some(v),
            StyleAttr::Alignment(v) => style.alignment = v,
            StyleAttr::SpaceBefore(v) => style.space_before = v,
            StyleAttr::SpaceAfter(v) => style.space_after = v,
            StyleAttr::LeftIndent(v) => style.left_indent = v,
            StyleAttr::RightIndent(v) => style.right_indent = v,
            StyleAttr::FirstLineIndent(v) => style.first_line_indent = v,
            StyleAttr::WordWrap(v) => style.word_wrap = Some(v),
            StyleAttr::Kerning(v) => style.kerning = v,
            StyleAttr::Tracking(v) => style.tracking = v,
            StyleAttr::UnderlineWidth(v) => style.underline_width = v,
            StyleAttr::UnderlineOffset(v) => style.underline_offset = v,
        }
    }
}
