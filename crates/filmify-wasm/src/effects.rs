//! Leaf filter WASM bindings.
//!
//! Each function borrows a [`JsPixelBuffer`] and returns a new one. The
//! input buffer stays usable on the JavaScript side.
//!
//! # Example
//!
//! ```typescript
//! import { JsPixelBuffer, gaussian_blur, resample } from '@filmify/wasm';
//!
//! const small = resample(image, image.width / 4, image.height / 4);
//! const blurred = gaussian_blur(small, 10);
//! ```

use crate::types::JsPixelBuffer;
use filmify_core::effects;
use wasm_bindgen::prelude::*;

/// Convert every color channel to BT.601 luminance. Alpha is kept.
///
/// # Errors
///
/// Returns an error if the pixel data length doesn't match width * height * 4.
#[wasm_bindgen]
pub fn grayscale(image: &JsPixelBuffer) -> Result<JsPixelBuffer, JsValue> {
    effects::grayscale(&image.to_core())
        .map(JsPixelBuffer::from)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Separable Gaussian blur with clamped edges.
///
/// A radius of zero or less returns an unchanged copy; radii above 25 are
/// clamped to 25.
#[wasm_bindgen]
pub fn gaussian_blur(image: &JsPixelBuffer, radius: f32) -> Result<JsPixelBuffer, JsValue> {
    effects::gaussian_blur(&image.to_core(), radius)
        .map(JsPixelBuffer::from)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Two successive Gaussian blurs at the same radius.
#[wasm_bindgen]
pub fn gaussian_blur_double(image: &JsPixelBuffer, radius: f32) -> Result<JsPixelBuffer, JsValue> {
    effects::gaussian_blur_double(&image.to_core(), radius)
        .map(JsPixelBuffer::from)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Bilinear resample to exact dimensions.
///
/// # Errors
///
/// Returns an error if either target dimension is zero or the input is
/// malformed.
#[wasm_bindgen]
pub fn resample(
    image: &JsPixelBuffer,
    target_width: u32,
    target_height: u32,
) -> Result<JsPixelBuffer, JsValue> {
    effects::resample(&image.to_core(), target_width, target_height)
        .map(JsPixelBuffer::from)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Screen-blend `overlay` onto `base` with weight `alpha` (0-255).
///
/// # Errors
///
/// Returns an error if the two buffers differ in size.
#[wasm_bindgen]
pub fn screen_blend(
    base: &JsPixelBuffer,
    overlay: &JsPixelBuffer,
    alpha: u8,
) -> Result<JsPixelBuffer, JsValue> {
    effects::screen_blend(&base.to_core(), &overlay.to_core(), alpha)
        .map(JsPixelBuffer::from)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Tests for effect bindings.
///
/// Error results hold a `JsValue`, which only exists on wasm32 targets, so
/// only success paths are checked here.
#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> JsPixelBuffer {
        let pixels = rgba.repeat((width * height) as usize);
        JsPixelBuffer::new(width, height, pixels)
    }

    #[test]
    fn test_grayscale_binding() {
        let out = grayscale(&solid(4, 3, [255, 0, 0, 255])).unwrap();
        assert_eq!((out.width(), out.height()), (4, 3));
        assert!(out.pixels().chunks_exact(4).all(|p| p == [76, 76, 76, 255]));
    }

    #[test]
    fn test_blur_uniform_is_unchanged() {
        let img = solid(12, 8, [40, 80, 120, 255]);
        let once = gaussian_blur(&img, 5.0).unwrap();
        let twice = gaussian_blur_double(&img, 5.0).unwrap();
        assert_eq!(once.pixels(), img.pixels());
        assert_eq!(twice.pixels(), img.pixels());
    }

    #[test]
    fn test_resample_binding() {
        let out = resample(&solid(8, 8, [10, 20, 30, 255]), 3, 5).unwrap();
        assert_eq!((out.width(), out.height()), (3, 5));
        assert_eq!(out.byte_length(), 3 * 5 * 4);
    }

    #[test]
    fn test_screen_blend_binding() {
        let base = solid(2, 2, [128, 128, 128, 255]);
        let overlay = solid(2, 2, [128, 128, 128, 255]);
        let out = screen_blend(&base, &overlay, 200).unwrap();
        assert_eq!(&out.pixels()[0..3], &[178, 178, 178]);
    }
}

/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_grayscale_rejects_short_buffer() {
        let img = JsPixelBuffer::new(10, 10, vec![0; 12]);
        assert!(grayscale(&img).is_err());
    }

    #[wasm_bindgen_test]
    fn test_resample_rejects_zero_target() {
        let img = JsPixelBuffer::new(2, 2, vec![0; 16]);
        assert!(resample(&img, 0, 2).is_err());
    }

    #[wasm_bindgen_test]
    fn test_screen_blend_rejects_mismatch() {
        let base = JsPixelBuffer::new(2, 2, vec![0; 16]);
        let overlay = JsPixelBuffer::new(1, 2, vec![0; 8]);
        assert!(screen_blend(&base, &overlay, 200).is_err());
    }
}
