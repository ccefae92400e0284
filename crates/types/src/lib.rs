pub mod color;
pub mod geometry;
pub mod units;

pub use color::Color;
pub use geometry::{PageSize, Size};
