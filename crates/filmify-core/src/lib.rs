//! Filmify Core - Image effects engine
//!
//! This crate provides the photo effects applied by the Filmify camera:
//! a black-and-white conversion and a soft-focus "glow" built from a
//! downscaled Gaussian blur screen-blended over the original.
//!
//! # Module Structure
//!
//! - `buffer` - [`PixelBuffer`] (8-bit RGBA) and [`EffectError`]
//! - `effects` - leaf filters: grayscale, Gaussian blur, resample, screen blend
//! - `pipeline` - the grayscale and glow pipelines and their parameters
//! - `decode` / `encode` - photo bytes in and out
//! - `process` - decode → effect → encode for a captured photo
//!
//! All filters are pure: they borrow their inputs and return new buffers.

pub mod buffer;
pub mod decode;
pub mod effects;
pub mod encode;
pub mod luminance;
pub mod pipeline;
pub mod process;

pub use buffer::{EffectError, PixelBuffer};
pub use pipeline::{
    apply_effect, run_glow_pipeline, run_glow_pipeline_with, run_grayscale_pipeline, Effect,
    EffectRequest, GlowParams, GlowStrength,
};
pub use process::{process_capture, ProcessError};
