//! RGBA pixel buffer and the errors raised by the effect filters.

use thiserror::Error;

/// Bytes per pixel in a [`PixelBuffer`] (8-bit RGBA).
pub const CHANNELS: usize = 4;

/// Error types for effect filters and pipelines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EffectError {
    /// The buffer's byte length does not match its declared dimensions,
    /// or one of the dimensions is zero. `expected` saturates to
    /// `usize::MAX` when the declared size does not fit in memory.
    #[error("Invalid buffer: {width}x{height} RGBA needs {expected} bytes, got {actual}")]
    InvalidBuffer {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Two buffers that must share dimensions do not.
    #[error("Dimension mismatch: base is {}x{}, overlay is {}x{}", .base.0, .base.1, .overlay.0, .overlay.1)]
    DimensionMismatch {
        base: (u32, u32),
        overlay: (u32, u32),
    },

    /// A resample target collapsed to zero in at least one axis.
    #[error("Degenerate dimensions: {width}x{height}")]
    DegenerateDimensions { width: u32, height: u32 },

    /// Pipeline parameters are out of range.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}

/// `width * height * CHANNELS`, or `None` on overflow.
fn checked_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(CHANNELS)
}

/// An image with 8-bit RGBA pixel data, row-major, no row padding.
///
/// Filters never modify a buffer in place; each one returns a new buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    /// Length must be width * height * 4.
    pub pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer, checking that the pixel data matches the dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, EffectError> {
        let buffer = Self {
            width,
            height,
            pixels,
        };
        buffer.validate()?;
        Ok(buffer)
    }

    /// Create a buffer filled with a single RGBA color.
    ///
    /// # Errors
    ///
    /// Returns `EffectError::InvalidBuffer` if either dimension is zero or
    /// the byte length does not fit in `usize`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, EffectError> {
        let Some(len) = checked_len(width, height) else {
            return Err(EffectError::InvalidBuffer {
                width,
                height,
                expected: usize::MAX,
                actual: 0,
            });
        };
        let pixels = rgba.repeat(len / CHANNELS);
        Self::new(width, height, pixels)
    }

    /// Create a buffer from an `image::RgbaImage`.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Borrow the pixels as an `image` crate view without copying.
    ///
    /// Returns `None` if the pixel data does not match the dimensions.
    pub fn as_image_view(&self) -> Option<image::ImageBuffer<image::Rgba<u8>, &[u8]>> {
        image::ImageBuffer::from_raw(self.width, self.height, self.pixels.as_slice())
    }

    /// Byte length required for the declared dimensions, or `None` if it
    /// overflows `usize`.
    pub fn expected_len(&self) -> Option<usize> {
        checked_len(self.width, self.height)
    }

    /// Check that both dimensions are positive and the byte length matches.
    pub fn validate(&self) -> Result<(), EffectError> {
        let expected = self.expected_len();
        if self.width == 0 || self.height == 0 || expected != Some(self.pixels.len()) {
            return Err(EffectError::InvalidBuffer {
                width: self.width,
                height: self.height,
                expected: expected.unwrap_or(usize::MAX),
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }

    /// Get the `(width, height)` pair.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Get the RGBA value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }
}
