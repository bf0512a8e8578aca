//! WASM-compatible wrapper types for pixel buffers.

use filmify_core::PixelBuffer;
use wasm_bindgen::prelude::*;

/// An RGBA pixel buffer wrapper for JavaScript.
///
/// Pixel data lives in WASM memory. `pixels()` copies it out as a
/// `Uint8Array`, so keep buffers on the WASM side between effect calls and
/// only read the pixels when drawing or saving.
#[wasm_bindgen]
pub struct JsPixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsPixelBuffer {
    /// Create a new buffer from dimensions and RGBA pixel data
    /// (4 bytes per pixel, row-major order).
    ///
    /// The data is not validated here; every effect validates its input.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsPixelBuffer {
        JsPixelBuffer {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array (copied).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsPixelBuffer {
    /// Convert to a core buffer for the effect functions.
    ///
    /// Note: This clones the pixel data.
    pub(crate) fn to_core(&self) -> PixelBuffer {
        PixelBuffer {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

impl From<PixelBuffer> for JsPixelBuffer {
    fn from(img: PixelBuffer) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }
}
