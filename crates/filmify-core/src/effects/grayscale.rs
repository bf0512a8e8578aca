//! Saturation removal.

use crate::buffer::{EffectError, PixelBuffer, CHANNELS};
use crate::luminance::calculate_luminance_u8;

/// Convert a buffer to grayscale.
///
/// Each pixel's R, G and B are replaced by its BT.601 luminance; alpha is
/// copied through unchanged.
///
/// # Errors
///
/// Returns `EffectError::InvalidBuffer` if the pixel data does not match
/// the declared dimensions.
pub fn grayscale(image: &PixelBuffer) -> Result<PixelBuffer, EffectError> {
    image.validate()?;

    let mut pixels = Vec::with_capacity(image.pixels.len());
    for chunk in image.pixels.chunks_exact(CHANNELS) {
        let lum = calculate_luminance_u8(chunk[0], chunk[1], chunk[2]);
        pixels.extend_from_slice(&[lum, lum, lum, chunk[3]]);
    }

    Ok(PixelBuffer {
        width: image.width,
        height: image.height,
        pixels,
    })
}
