//! Filmify WASM - WebAssembly bindings for Filmify
//!
//! This crate exposes the filmify-core effects to JavaScript/TypeScript so
//! the same grayscale and glow pipelines can run in a browser.
//!
//! # Module Structure
//!
//! - `types` - [`JsPixelBuffer`], the RGBA buffer wrapper
//! - `effects` - Leaf filters (grayscale, blur, resample, screen blend)
//! - `pipeline` - Grayscale and glow pipelines, effect codes
//! - `decode` / `encode` - Photo bytes in and out
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, run_glow_pipeline, encode_jpeg } from '@filmify/wasm';
//!
//! await init();
//!
//! const image = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const glowing = run_glow_pipeline(image, false);
//! const jpeg = encode_jpeg(glowing, 100);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod effects;
mod encode;
mod pipeline;
mod types;

pub use decode::decode_image;
pub use effects::{gaussian_blur, gaussian_blur_double, grayscale, resample, screen_blend};
pub use encode::encode_jpeg;
pub use pipeline::{apply_effect, run_glow_pipeline, run_glow_pipeline_with, run_grayscale_pipeline};
pub use types::JsPixelBuffer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
