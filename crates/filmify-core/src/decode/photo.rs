//! Compressed photo → RGBA pixel buffer.

use std::io::Cursor;

use image::{DynamicImage, ImageReader};
use tracing::debug;

use super::orientation::get_orientation;
use super::DecodeError;
use crate::buffer::PixelBuffer;

/// Decode a photo from bytes, applying EXIF orientation correction.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be recognised
/// and `DecodeError::CorruptedFile` if decoding fails.
pub fn decode_image(bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
    let orientation = get_orientation(bytes);
    let img = decode_dynamic(bytes)?;
    let buffer = PixelBuffer::from_rgba_image(orientation.apply(img).into_rgba8());
    debug!(
        width = buffer.width,
        height = buffer.height,
        ?orientation,
        "Decoded photo"
    );
    Ok(buffer)
}

/// Decode a photo from bytes without applying EXIF orientation.
pub fn decode_image_no_orientation(bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
    let img = decode_dynamic(bytes)?;
    Ok(PixelBuffer::from_rgba_image(img.into_rgba8()))
}

fn decode_dynamic(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))
}
