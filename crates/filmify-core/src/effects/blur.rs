//! Separable Gaussian blur.
//!
//! The 2D Gaussian is split into a horizontal pass and a vertical pass. The
//! horizontal pass writes full-precision `f32` values so the image is only
//! quantised once, after the vertical pass. Samples outside the image are
//! clamped to the nearest edge pixel.
//!
//! Kernel shape follows the mobile blur intrinsic the glow effect was tuned
//! on: for a radius `r` the kernel spans `ceil(r)` pixels on each side and
//! uses `sigma = 0.4 * r + 0.6`.

use super::for_each_row;
use crate::buffer::{EffectError, PixelBuffer, CHANNELS};

/// Largest radius honoured by [`gaussian_blur`]; larger values are clamped.
pub const MAX_BLUR_RADIUS: f32 = 25.0;

/// Build a normalised 1D Gaussian kernel for `radius`.
///
/// The returned kernel has `2 * ceil(radius) + 1` taps and sums to 1.
/// A radius `<= 0` yields the single-tap identity kernel.
pub fn build_kernel(radius: f32) -> Vec<f32> {
    if radius.is_nan() || radius <= 0.0 {
        return vec![1.0];
    }
    let radius = radius.min(MAX_BLUR_RADIUS);
    let half = radius.ceil() as i32;
    let sigma = 0.4 * radius + 0.6;
    let denom = 2.0 * sigma * sigma;

    let mut kernel: Vec<f32> = (-half..=half)
        .map(|i| (-((i * i) as f32) / denom).exp())
        .collect();
    let sum: f32 = kernel.iter().sum();
    for w in kernel.iter_mut() {
        *w /= sum;
    }
    kernel
}

/// Blur a buffer with a Gaussian of the given radius.
///
/// All four channels, alpha included, are blurred the same way. A radius
/// `<= 0` (or NaN) returns an identical copy.
///
/// # Errors
///
/// Returns `EffectError::InvalidBuffer` if the pixel data does not match
/// the declared dimensions.
pub fn gaussian_blur(image: &PixelBuffer, radius: f32) -> Result<PixelBuffer, EffectError> {
    image.validate()?;
    if radius.is_nan() || radius <= 0.0 {
        return Ok(image.clone());
    }

    let kernel = build_kernel(radius);
    let half = (kernel.len() / 2) as isize;
    let width = image.width as usize;
    let height = image.height as usize;
    let row_len = width * CHANNELS;
    let src = &image.pixels;

    // Horizontal pass
    let mut horizontal = vec![0.0f32; src.len()];
    for_each_row(&mut horizontal, row_len, |y, out| {
        let src_row = &src[y * row_len..(y + 1) * row_len];
        for x in 0..width {
            let mut acc = [0.0f32; CHANNELS];
            for (k, weight) in kernel.iter().enumerate() {
                let sx = clamp_index(x as isize + k as isize - half, width);
                let p = &src_row[sx * CHANNELS..(sx + 1) * CHANNELS];
                for (a, v) in acc.iter_mut().zip(p) {
                    *a += *v as f32 * weight;
                }
            }
            out[x * CHANNELS..(x + 1) * CHANNELS].copy_from_slice(&acc);
        }
    });

    // Vertical pass
    let mut pixels = vec![0u8; src.len()];
    let horizontal = &horizontal;
    for_each_row(&mut pixels, row_len, |y, out| {
        let mut acc = vec![0.0f32; row_len];
        for (k, weight) in kernel.iter().enumerate() {
            let sy = clamp_index(y as isize + k as isize - half, height);
            let src_row = &horizontal[sy * row_len..(sy + 1) * row_len];
            for (a, v) in acc.iter_mut().zip(src_row) {
                *a += v * weight;
            }
        }
        for (o, a) in out.iter_mut().zip(&acc) {
            *o = a.clamp(0.0, 255.0).round() as u8;
        }
    });

    Ok(PixelBuffer {
        width: image.width,
        height: image.height,
        pixels,
    })
}

/// Apply [`gaussian_blur`] twice at the same radius.
///
/// The intermediate result is quantised to 8 bits.
pub fn gaussian_blur_double(image: &PixelBuffer, radius: f32) -> Result<PixelBuffer, EffectError> {
    let first = gaussian_blur(image, radius)?;
    gaussian_blur(&first, radius)
}

/// Clamp a signed sample coordinate into `0..len` (edge replication).
#[inline]
fn clamp_index(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn buffer_strategy() -> impl Strategy<Value = PixelBuffer> {
        (1u32..=12, 1u32..=12).prop_flat_map(|(w, h)| {
            let len = (w * h * 4) as usize;
            prop::collection::vec(any::<u8>(), len..=len).prop_map(move |pixels| PixelBuffer {
                width: w,
                height: h,
                pixels,
            })
        })
    }

    proptest! {
        /// Property: non-positive radius returns the input unchanged.
        #[test]
        fn prop_non_positive_radius_identity(img in buffer_strategy(), radius in -50.0f32..=0.0) {
            prop_assert_eq!(gaussian_blur(&img, radius).unwrap(), img);
        }

        /// Property: output stays within the input's per-channel range.
        #[test]
        fn prop_blur_within_input_range(img in buffer_strategy(), radius in 0.1f32..=8.0) {
            let blurred = gaussian_blur(&img, radius).unwrap();
            prop_assert_eq!(blurred.dimensions(), img.dimensions());
            for c in 0..4 {
                let channel = img.pixels.iter().skip(c).step_by(4);
                let lo = *channel.clone().min().unwrap();
                let hi = *channel.max().unwrap();
                for v in blurred.pixels.iter().skip(c).step_by(4) {
                    prop_assert!(*v >= lo && *v <= hi);
                }
            }
        }
    }
}
