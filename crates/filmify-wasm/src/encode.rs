//! Image encoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { encode_jpeg } from '@filmify/wasm';
//!
//! const jpegBytes = encode_jpeg(image, 100);
//! ```

use crate::types::JsPixelBuffer;
use filmify_core::encode;
use wasm_bindgen::prelude::*;

/// Encode a pixel buffer to JPEG bytes. Alpha is discarded.
///
/// # Arguments
///
/// * `image` - The buffer to encode
/// * `quality` - JPEG quality (1-100; the camera saves at 100)
///
/// # Errors
///
/// Returns an error if the pixel data length doesn't match width * height * 4
/// or either dimension is zero.
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsPixelBuffer, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(&image.to_core(), quality).map_err(|e| JsValue::from_str(&e.to_string()))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_invalid_pixel_data() {
        let img = JsPixelBuffer::new(100, 100, vec![128u8; 50 * 50 * 4]);
        assert!(encode_jpeg(&img, 90).is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_zero_dimensions() {
        let img = JsPixelBuffer::new(0, 10, vec![]);
        assert!(encode_jpeg(&img, 90).is_err());
    }
}
