//! Image decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@filmify/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ```

use crate::types::JsPixelBuffer;
use filmify_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a JPEG or PNG photo to RGBA, applying EXIF orientation.
///
/// # Errors
///
/// Returns an error if the format is not recognized or the data is
/// corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsPixelBuffer, JsValue> {
    decode::decode_image(bytes)
        .map(JsPixelBuffer::from)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
