//! Screen compositing.
//!
//! Screen mixes light in inverted space: `255 - (255-a)(255-b)/255`. The
//! result is never darker than either input. The overlay is weighted by an
//! alpha value, which linearly interpolates between the base and the full
//! screen result.

use crate::buffer::{EffectError, PixelBuffer};

/// Screen two channel values.
///
/// Returns the unrounded result in `0.0..=255.0`.
#[inline]
pub fn screen_channel(base: u8, overlay: u8) -> f32 {
    let b = base as f32;
    let o = overlay as f32;
    255.0 - (255.0 - b) * (255.0 - o) / 255.0
}

/// Composite `overlay` over `base` with the screen blend mode.
///
/// For every channel, alpha included:
///
/// ```text
/// screen = 255 - (255 - base) * (255 - overlay) / 255
/// result = base + (screen - base) * alpha / 255
/// ```
///
/// `alpha = 0` returns `base` unchanged and `alpha = 255` returns the plain
/// screen result.
///
/// # Errors
///
/// Returns `EffectError::DimensionMismatch` if the buffers differ in size,
/// or `EffectError::InvalidBuffer` if either one is malformed.
pub fn screen_blend(
    base: &PixelBuffer,
    overlay: &PixelBuffer,
    alpha: u8,
) -> Result<PixelBuffer, EffectError> {
    base.validate()?;
    overlay.validate()?;
    if base.dimensions() != overlay.dimensions() {
        return Err(EffectError::DimensionMismatch {
            base: base.dimensions(),
            overlay: overlay.dimensions(),
        });
    }

    if alpha == 0 {
        return Ok(base.clone());
    }

    let weight = alpha as f32 / 255.0;
    let pixels = base
        .pixels
        .iter()
        .zip(&overlay.pixels)
        .map(|(&b, &o)| {
            let bf = b as f32;
            let v = bf + (screen_channel(b, o) - bf) * weight;
            v.clamp(0.0, 255.0).round() as u8
        })
        .collect();

    Ok(PixelBuffer {
        width: base.width,
        height: base.height,
        pixels,
    })
}
