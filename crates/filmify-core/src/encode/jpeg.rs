//! JPEG encoding using the `image` crate's encoder.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;
use tracing::debug;

use crate::buffer::{PixelBuffer, CHANNELS};

/// Quality the capture flow saves photos at.
pub const DEFAULT_JPEG_QUALITY: u8 = 100;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode an RGBA buffer to JPEG bytes, discarding alpha.
///
/// `quality` is clamped to 1-100.
pub fn encode_jpeg(image: &PixelBuffer, quality: u8) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = image.expected_len();
    if expected != Some(image.pixels.len()) {
        return Err(EncodeError::InvalidPixelData {
            expected: expected.unwrap_or(usize::MAX),
            actual: image.pixels.len(),
        });
    }

    let rgb: Vec<u8> = image
        .pixels
        .chunks_exact(CHANNELS)
        .flat_map(|p| [p[0], p[1], p[2]])
        .collect();

    let quality = quality.clamp(1, 100);
    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(&rgb, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    let bytes = buffer.into_inner();
    debug!(width, height, quality, size = bytes.len(), "Encoded JPEG");
    Ok(bytes)
}
