//! Bilinear resampling.
//!
//! Uses the `image` crate's triangle filter, which is bilinear when
//! upscaling and widens its support when downscaling so that small outputs
//! are averaged rather than aliased.

use image::imageops::FilterType;

use crate::buffer::{EffectError, PixelBuffer};

/// Resize a buffer to exact dimensions with bilinear filtering.
///
/// # Errors
///
/// Returns `EffectError::DegenerateDimensions` if `width` or `height` is
/// zero, and `EffectError::InvalidBuffer` if the source is malformed.
pub fn resample(image: &PixelBuffer, width: u32, height: u32) -> Result<PixelBuffer, EffectError> {
    image.validate()?;
    if width == 0 || height == 0 {
        return Err(EffectError::DegenerateDimensions { width, height });
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let view = image.as_image_view().ok_or(EffectError::InvalidBuffer {
        width: image.width,
        height: image.height,
        expected: image.expected_len().unwrap_or(usize::MAX),
        actual: image.pixels.len(),
    })?;

    let resized = image::imageops::resize(&view, width, height, FilterType::Triangle);
    Ok(PixelBuffer::from_rgba_image(resized))
}

/// Resize a buffer by a uniform factor.
///
/// Target dimensions are `width * factor` and `height * factor`, truncated
/// toward zero.
///
/// # Errors
///
/// Returns `EffectError::DegenerateDimensions` if either target dimension
/// truncates to zero or `factor` is not a finite positive number.
pub fn scale(image: &PixelBuffer, factor: f32) -> Result<PixelBuffer, EffectError> {
    image.validate()?;
    let (width, height) = scaled_dimensions(image.width, image.height, factor);
    if !factor.is_finite() || width == 0 || height == 0 {
        return Err(EffectError::DegenerateDimensions { width, height });
    }
    resample(image, width, height)
}

/// Compute `(trunc(width * factor), trunc(height * factor))`.
///
/// NaN and negative products saturate to zero.
fn scaled_dimensions(width: u32, height: u32, factor: f32) -> (u32, u32) {
    (
        (width as f32 * factor) as u32,
        (height as f32 * factor) as u32,
    )
}
