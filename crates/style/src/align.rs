use serde::{Deserialize, Serialize};

/// Horizontal paragraph alignment.
///
/// The external rendering engine exposes alignment as integer constants
/// (0=left, 1=center, 2=right, 4=justify); those codes are accepted in
/// override maps alongside the lowercase names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// Maps an engine alignment code to an `Alignment`.
    ///
    /// Returns `None` for unrecognized codes.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Alignment::Left),
            1 => Some(Alignment::Center),
            2 => Some(Alignment::Right),
            4 => Some(Alignment::Justify),
            _ => None,
        }
    }

    /// The engine's integer code for this alignment.
    pub fn code(&self) -> i64 {
        match self {
            Alignment::Left => 0,
            Alignment::Center => 1,
            Alignment::Right => 2,
            Alignment::Justify => 4,
        }
    }

    /// Parse an alignment from its lowercase name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Alignment::Left),
            "center" => Some(Alignment::Center),
            "right" => Some(Alignment::Right),
            "justify" => Some(Alignment::Justify),
            _ => None,
        }
    }
}
