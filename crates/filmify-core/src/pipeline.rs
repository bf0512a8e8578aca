//! Named effect pipelines.
//!
//! Two pipelines are built from the filters in [`crate::effects`]:
//!
//! - **Grayscale**: `grayscale(input)`
//! - **Glow**: downscale → double Gaussian blur → upscale → resample to the
//!   original size → screen blend over the original
//!
//! The glow effect blurs a quarter-size copy of the photo, which is much
//! cheaper than blurring at full resolution and gives the wide, soft bloom
//! the effect is known for. Scaling by 0.25 and then by 4 does not restore
//! the original size when a dimension is not divisible by four, so the
//! pipeline always finishes with an exact resample before compositing.
//!
//! Pipelines hold no state. A failing step aborts the whole run and its
//! error is returned unchanged.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::buffer::{EffectError, PixelBuffer};
use crate::effects::{gaussian_blur, grayscale, resample, scale, screen_blend};

/// Which glow radius to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GlowStrength {
    /// Subtle bloom (radius 10 by default).
    #[default]
    Soft,
    /// Heavy bloom (radius 25 by default).
    Strong,
}

impl From<bool> for GlowStrength {
    fn from(strong: bool) -> Self {
        if strong {
            GlowStrength::Strong
        } else {
            GlowStrength::Soft
        }
    }
}

/// Tunable parameters for the glow pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowParams {
    /// Factor applied before blurring (0.0 exclusive to 1.0 inclusive).
    /// The blurred copy is scaled back up by the inverse.
    pub downscale_factor: f32,
    /// Blur radius for [`GlowStrength::Soft`].
    pub soft_radius: f32,
    /// Blur radius for [`GlowStrength::Strong`].
    pub strong_radius: f32,
    /// Number of blur passes at the chosen radius.
    pub blur_passes: u32,
    /// Weight of the blurred overlay in the screen blend (0-255).
    pub blend_alpha: u8,
}

impl Default for GlowParams {
    fn default() -> Self {
        Self {
            downscale_factor: 0.25,
            soft_radius: 10.0,
            strong_radius: 25.0,
            blur_passes: 2,
            blend_alpha: 200,
        }
    }
}

impl GlowParams {
    /// Create parameters with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Blur radius for the given strength.
    pub fn radius(&self, strength: GlowStrength) -> f32 {
        match strength {
            GlowStrength::Soft => self.soft_radius,
            GlowStrength::Strong => self.strong_radius,
        }
    }

    /// Factor used to scale the blurred copy back up.
    pub fn upscale_factor(&self) -> f32 {
        1.0 / self.downscale_factor
    }

    /// Check that the parameters describe a runnable pipeline.
    pub fn validate(&self) -> Result<(), EffectError> {
        if !(self.downscale_factor > 0.0 && self.downscale_factor <= 1.0) {
            return Err(EffectError::InvalidParams(format!(
                "downscale_factor must be in (0, 1], got {}",
                self.downscale_factor
            )));
        }
        if self.blur_passes == 0 {
            return Err(EffectError::InvalidParams(
                "blur_passes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Effect selected for a capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Effect {
    /// Black and white.
    Grayscale,
    /// Glow at the soft radius.
    #[default]
    GlowSoft,
    /// Glow at the strong radius.
    GlowStrong,
}

impl Effect {
    /// Map the capture screen's two toggles to an effect.
    ///
    /// Black and white takes precedence over the strength toggle.
    pub fn from_toggles(black_and_white: bool, strong: bool) -> Self {
        match (black_and_white, strong) {
            (true, _) => Effect::Grayscale,
            (false, true) => Effect::GlowStrong,
            (false, false) => Effect::GlowSoft,
        }
    }
}

/// A photo together with the effect to apply to it.
#[derive(Debug, Clone)]
pub struct EffectRequest {
    pub effect: Effect,
    pub source: PixelBuffer,
}

impl EffectRequest {
    pub fn new(effect: Effect, source: PixelBuffer) -> Self {
        Self { effect, source }
    }

    /// Run the requested effect, consuming the request.
    pub fn run(self) -> Result<PixelBuffer, EffectError> {
        apply_effect(&self.source, self.effect)
    }
}

/// Apply `effect` to `source` with default glow parameters.
pub fn apply_effect(source: &PixelBuffer, effect: Effect) -> Result<PixelBuffer, EffectError> {
    match effect {
        Effect::Grayscale => run_grayscale_pipeline(source),
        Effect::GlowSoft => run_glow_pipeline(source, false),
        Effect::GlowStrong => run_glow_pipeline(source, true),
    }
}

/// Run the grayscale pipeline.
pub fn run_grayscale_pipeline(source: &PixelBuffer) -> Result<PixelBuffer, EffectError> {
    info!(
        width = source.width,
        height = source.height,
        "Running grayscale pipeline"
    );
    grayscale(source)
}

/// Run the glow pipeline with default parameters.
///
/// `strong` selects radius 25 instead of 10.
pub fn run_glow_pipeline(source: &PixelBuffer, strong: bool) -> Result<PixelBuffer, EffectError> {
    run_glow_pipeline_with(source, GlowStrength::from(strong), &GlowParams::default())
}

/// Run the glow pipeline with explicit parameters.
///
/// The output always has the same dimensions as `source`.
pub fn run_glow_pipeline_with(
    source: &PixelBuffer,
    strength: GlowStrength,
    params: &GlowParams,
) -> Result<PixelBuffer, EffectError> {
    params.validate()?;
    source.validate()?;

    let radius = params.radius(strength);
    info!(
        width = source.width,
        height = source.height,
        ?strength,
        radius,
        "Running glow pipeline"
    );

    let mut blurred = scale(source, params.downscale_factor)?;
    debug!(width = blurred.width, height = blurred.height, "Downscaled");

    for pass in 0..params.blur_passes {
        blurred = gaussian_blur(&blurred, radius)?;
        debug!(pass, radius, "Blur pass complete");
    }

    let upscaled = scale(&blurred, params.upscale_factor())?;
    debug!(width = upscaled.width, height = upscaled.height, "Upscaled");

    let overlay = resample(&upscaled, source.width, source.height)?;

    screen_blend(source, &overlay, params.blend_alpha)
}
