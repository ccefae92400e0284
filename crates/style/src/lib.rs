pub mod align;
pub mod attr;
pub mod paragraph;
pub mod sheet;

pub use align::Alignment;
pub use attr::{AttrKind, StyleAttr};
pub use paragraph::{ColorValue, ParagraphStyle};
pub use sheet::{OverrideOptions, StyleError, StyleOverrides, StyleSheet};
