//! Effect pipeline WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, apply_effect, encode_jpeg } from '@filmify/wasm';
//!
//! const image = decode_image(bytes);
//! const glowing = apply_effect(image, 2); // strong glow
//! const jpeg = encode_jpeg(glowing, 100);
//! ```

use crate::types::JsPixelBuffer;
use filmify_core::{pipeline, Effect, GlowParams, GlowStrength};
use wasm_bindgen::prelude::*;

/// Map a numeric effect code to an [`Effect`].
///
/// 0 = Grayscale, 1 = GlowSoft, 2 = GlowStrong. Unknown codes fall back to
/// the default soft glow.
pub(crate) fn effect_from_u8(code: u8) -> Effect {
    match code {
        0 => Effect::Grayscale,
        1 => Effect::GlowSoft,
        2 => Effect::GlowStrong,
        _ => Effect::default(),
    }
}

/// Run the black-and-white pipeline.
#[wasm_bindgen]
pub fn run_grayscale_pipeline(image: &JsPixelBuffer) -> Result<JsPixelBuffer, JsValue> {
    pipeline::run_grayscale_pipeline(&image.to_core())
        .map(JsPixelBuffer::from)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Run the glow pipeline with default parameters.
///
/// `strong` selects the wide radius. The result has the input's dimensions.
#[wasm_bindgen]
pub fn run_glow_pipeline(image: &JsPixelBuffer, strong: bool) -> Result<JsPixelBuffer, JsValue> {
    pipeline::run_glow_pipeline(&image.to_core(), strong)
        .map(JsPixelBuffer::from)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Run the glow pipeline with custom parameters.
///
/// # Arguments
///
/// * `params` - Object with any of `downscale_factor`, `soft_radius`,
///   `strong_radius`, `blur_passes`, `blend_alpha`; missing fields use the
///   defaults
///
/// # Errors
///
/// Returns an error if `params` cannot be deserialized or is out of range.
#[wasm_bindgen]
pub fn run_glow_pipeline_with(
    image: &JsPixelBuffer,
    strong: bool,
    params: JsValue,
) -> Result<JsPixelBuffer, JsValue> {
    let params: GlowParams = serde_wasm_bindgen::from_value(params)
        .map_err(|e| JsValue::from_str(&format!("Invalid glow params: {}", e)))?;

    pipeline::run_glow_pipeline_with(&image.to_core(), GlowStrength::from(strong), &params)
        .map(JsPixelBuffer::from)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Apply an effect selected by numeric code.
///
/// # Arguments
///
/// * `effect` - 0 = Grayscale, 1 = Soft glow, 2 = Strong glow (others: soft glow)
#[wasm_bindgen]
pub fn apply_effect(image: &JsPixelBuffer, effect: u8) -> Result<JsPixelBuffer, JsValue> {
    pipeline::apply_effect(&image.to_core(), effect_from_u8(effect))
        .map(JsPixelBuffer::from)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> JsPixelBuffer {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[(x * 7) as u8, (y * 5) as u8, 100, 255]);
            }
        }
        JsPixelBuffer::new(width, height, pixels)
    }

    #[test]
    fn test_effect_from_u8() {
        assert_eq!(effect_from_u8(0), Effect::Grayscale);
        assert_eq!(effect_from_u8(1), Effect::GlowSoft);
        assert_eq!(effect_from_u8(2), Effect::GlowStrong);
        assert_eq!(effect_from_u8(3), Effect::GlowSoft);
        assert_eq!(effect_from_u8(255), Effect::GlowSoft);
    }

    #[test]
    fn test_glow_keeps_dimensions() {
        let img = gradient(33, 18);
        for strong in [false, true] {
            let out = run_glow_pipeline(&img, strong).unwrap();
            assert_eq!((out.width(), out.height()), (33, 18));
        }
    }

    #[test]
    fn test_apply_effect_codes() {
        let img = gradient(16, 12);
        let gray = apply_effect(&img, 0).unwrap();
        let direct = run_grayscale_pipeline(&img).unwrap();
        assert_eq!(gray.pixels(), direct.pixels());

        let strong = apply_effect(&img, 2).unwrap();
        assert_eq!(strong.pixels(), run_glow_pipeline(&img, true).unwrap().pixels());
    }
}
