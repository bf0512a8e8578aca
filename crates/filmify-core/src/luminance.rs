//! Luminance calculation using ITU-R BT.601 coefficients.
//!
//! These are the weights used by the grayscale effect to remove saturation
//! from a captured photo.

/// ITU-R BT.601 coefficient for red channel in luminance calculation.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for green channel in luminance calculation.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for blue channel in luminance calculation.
pub const LUMINANCE_B: f32 = 0.114;

/// Calculate luminance from normalized RGB values (0.0 to 1.0).
#[inline]
pub fn calculate_luminance(r: f32, g: f32, b: f32) -> f32 {
    LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b
}

/// Calculate luminance from u8 RGB values (0 to 255).
///
/// The result is rounded to the nearest integer. Because the weights sum to
/// one, a gray input `(v, v, v)` always maps back to `v`.
#[inline]
pub fn calculate_luminance_u8(r: u8, g: u8, b: u8) -> u8 {
    let lum = LUMINANCE_R * r as f32 + LUMINANCE_G * g as f32 + LUMINANCE_B * b as f32;
    lum.clamp(0.0, 255.0).round() as u8
}
