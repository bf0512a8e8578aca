//! End-to-end processing of a captured photo.
//!
//! Mirrors what the camera screen does once a photo has been saved:
//! decode the JPEG, run the selected effect, and re-encode the result so it
//! can overwrite the original file.

use thiserror::Error;
use tracing::info;

use crate::decode::{decode_image, DecodeError};
use crate::encode::{encode_jpeg, EncodeError};
use crate::pipeline::{apply_effect, Effect};
use crate::EffectError;

/// Any failure along the decode → effect → encode chain.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Effect(#[from] EffectError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Decode `bytes`, apply `effect` and encode the result as JPEG.
pub fn process_capture(bytes: &[u8], effect: Effect, quality: u8) -> Result<Vec<u8>, ProcessError> {
    let source = decode_image(bytes)?;
    info!(
        width = source.width,
        height = source.height,
        ?effect,
        "Processing capture"
    );
    let processed = apply_effect(&source, effect)?;
    Ok(encode_jpeg(&processed, quality)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::DEFAULT_JPEG_QUALITY;
    use crate::PixelBuffer;

    fn capture(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
        encode_jpeg(&PixelBuffer::filled(width, height, rgba).unwrap(), DEFAULT_JPEG_QUALITY).unwrap()
    }

    #[test]
    fn test_process_grayscale() {
        let jpeg = capture(40, 30, [255, 0, 0, 255]);
        let out = process_capture(&jpeg, Effect::Grayscale, DEFAULT_JPEG_QUALITY).unwrap();
        let img = decode_image(&out).unwrap();
        assert_eq!(img.dimensions(), (40, 30));
        for p in img.pixels.chunks_exact(4) {
            assert!((p[0] as i32 - p[2] as i32).abs() <= 2);
            assert!((p[0] as i32 - 76).abs() <= 4, "got {}", p[0]);
        }
    }

    #[test]
    fn test_process_glow_keeps_size() {
        let jpeg = capture(42, 30, [60, 90, 120, 255]);
        for effect in [Effect::GlowSoft, Effect::GlowStrong] {
            let out = process_capture(&jpeg, effect, 90).unwrap();
            assert_eq!(decode_image(&out).unwrap().dimensions(), (42, 30));
        }
    }

    #[test]
    fn test_process_decode_error() {
        let result = process_capture(b"not a photo", Effect::Grayscale, 90);
        assert!(matches!(result, Err(ProcessError::Decode(_))));
    }

    #[test]
    fn test_process_effect_error() {
        // Too small to downscale by four
        let jpeg = capture(2, 2, [0, 0, 0, 255]);
        let result = process_capture(&jpeg, Effect::GlowSoft, 90);
        assert!(matches!(
            result,
            Err(ProcessError::Effect(EffectError::DegenerateDimensions { .. }))
        ));
    }
}
