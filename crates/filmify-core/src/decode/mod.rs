//! Photo decoding for the capture flow.
//!
//! A captured photo arrives as compressed bytes (JPEG from the camera, PNG is
//! accepted too). Decoding applies the EXIF orientation, so a portrait shot
//! comes out upright, and yields an RGBA [`PixelBuffer`](crate::PixelBuffer)
//! ready for the effect pipelines.

mod orientation;
mod photo;

pub use orientation::{get_orientation, Orientation};
pub use photo::{decode_image, decode_image_no_orientation};

use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The byte stream is not in a recognised image format.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image data is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}
