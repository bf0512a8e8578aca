//! Encoding of processed photos for saving.
//!
//! The capture flow writes the processed photo back as a JPEG at maximum
//! quality. JPEG has no alpha channel, so alpha is dropped on encode.

mod jpeg;

pub use jpeg::{encode_jpeg, EncodeError, DEFAULT_JPEG_QUALITY};
