//! Unit conversion constants for page geometry.
//!
//! All document measurements are expressed in PostScript points (1/72 inch).
//! These constants convert common physical units into points.

/// Points per inch.
pub const INCH: f32 = 72.0;

/// Points per millimetre.
pub const MM: f32 = INCH / 25.4;

/// Points per centimetre.
pub const CM: f32 = MM * 10.0;

/// Converts millimetres to points.
pub fn mm(value: f32) -> f32 {
    value * MM
}

/// Converts centimetres to points.
pub fn cm(value: f32) -> f32 {
    value * CM
}

/// Converts inches to points.
pub fn inch(value: f32) -> f32 {
    value * INCH
}
