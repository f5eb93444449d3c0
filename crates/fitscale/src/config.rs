//! Resampling policy.
//!
//! Every threshold, weight and kernel used by the resizers lives here so the policy
//! can be audited in one place and swapped per [`crate::SmartResizer`].

use fitscale_imgproc::filter::kernels::{sharpen_kernel_3x3, Kernel3x3};

use crate::error::ResizeError;

/// Both axis ratios above this value take the single bilinear downscale path.
pub const NEAR_IDENTITY_RATIO: f64 = 0.95;

/// A downscale step whose remaining ratio is at most this value halves the image.
pub const HALVING_RATIO: f64 = 0.5;

/// Weights of the resampled and sharpened images after a downscale.
pub const SHARPEN_BLEND: BlendWeights = BlendWeights {
    base: 0.7,
    detail: 0.3,
};

/// Upscales below this factor on both axes use a single Lanczos pass.
pub const DIRECT_UPSCALE_LIMIT: f64 = 2.0;

/// Stepwise upscaling stops doubling once an axis reaches this fraction of its target.
pub const FINAL_PASS_FRACTION: f64 = 0.8;

/// Canny hysteresis thresholds on the 8-bit scale.
pub const EDGE_THRESHOLDS: EdgeThresholds = EdgeThresholds {
    low: 50.0,
    high: 150.0,
};

/// Weights of the resampled image and the edge map after a stepwise upscale.
pub const EDGE_BLEND: BlendWeights = BlendWeights {
    base: 0.95,
    detail: 0.05,
};

/// Default lower bound for [`ScaleBounds`].
pub const DEFAULT_MIN_SCALE: f64 = 0.5;

/// Default upper bound for [`ScaleBounds`].
pub const DEFAULT_MAX_SCALE: f64 = 2.0;

/// Weights of a two image blend, `base * resampled + detail * enhanced`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendWeights {
    /// Weight of the resampled image.
    pub base: f32,
    /// Weight of the detail image (sharpened image or edge map).
    pub detail: f32,
}

/// Hysteresis thresholds for edge detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeThresholds {
    /// Low threshold.
    pub low: f32,
    /// High threshold.
    pub high: f32,
}

/// Configuration of the multi-stage resizers.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeConfig {
    /// See [`NEAR_IDENTITY_RATIO`].
    pub near_identity_ratio: f64,
    /// See [`HALVING_RATIO`].
    pub halving_ratio: f64,
    /// Kernel applied after downscaling.
    pub sharpen_kernel: Kernel3x3,
    /// See [`SHARPEN_BLEND`].
    pub sharpen_blend: BlendWeights,
    /// See [`DIRECT_UPSCALE_LIMIT`].
    pub direct_upscale_limit: f64,
    /// See [`FINAL_PASS_FRACTION`].
    pub final_pass_fraction: f64,
    /// See [`EDGE_THRESHOLDS`].
    pub edge_thresholds: EdgeThresholds,
    /// See [`EDGE_BLEND`].
    pub edge_blend: BlendWeights,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            near_identity_ratio: NEAR_IDENTITY_RATIO,
            halving_ratio: HALVING_RATIO,
            sharpen_kernel: sharpen_kernel_3x3(),
            sharpen_blend: SHARPEN_BLEND,
            direct_upscale_limit: DIRECT_UPSCALE_LIMIT,
            final_pass_fraction: FINAL_PASS_FRACTION,
            edge_thresholds: EDGE_THRESHOLDS,
            edge_blend: EDGE_BLEND,
        }
    }
}

/// Bounds on the scale factor chosen when fitting an image to a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBounds {
    min_scale: f64,
    max_scale: f64,
}

impl ScaleBounds {
    /// Create new scale bounds.
    ///
    /// # Errors
    ///
    /// Both bounds must be finite and positive, and `min_scale <= max_scale`.
    pub fn new(min_scale: f64, max_scale: f64) -> Result<Self, ResizeError> {
        let valid = min_scale.is_finite()
            && max_scale.is_finite()
            && min_scale > 0.0
            && min_scale <= max_scale;

        if !valid {
            return Err(ResizeError::InvalidScaleBounds {
                min: min_scale,
                max: max_scale,
            });
        }

        Ok(Self {
            min_scale,
            max_scale,
        })
    }

    /// The smallest scale factor allowed.
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// The largest scale factor allowed.
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
        }
    }
}
