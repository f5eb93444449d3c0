#![deny(missing_docs)]
#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

/// resampling policy and scale bounds.
pub mod config;

/// multi-stage downscaling.
pub mod downscale;

/// error types for the resizing operations.
pub mod error;

/// canvas fitting.
pub mod fit;

/// planning of multi-stage resizes.
pub mod plan;

/// the pixel operations the resizers are built on.
pub mod resampler;

/// adaptive resizing.
pub mod resize;

/// multi-stage upscaling.
pub mod upscale;

#[cfg(test)]
mod testing;

#[doc(inline)]
pub use fitscale_image as image;

#[doc(inline)]
pub use fitscale_imgproc as imgproc;

pub use crate::config::{BlendWeights, EdgeThresholds, ResizeConfig, ScaleBounds};
pub use crate::downscale::downscale;
pub use crate::error::ResizeError;
pub use crate::fit::{fit, fit_default, FitResult};
pub use crate::plan::{downscale_plan, upscale_plan, Enhancement, ResampleStep, ResizePlan};
pub use crate::resampler::{FastResampler, Resampler};
pub use crate::resize::{adaptive_resize, select_strategy, ResizeStrategy, SmartResizer};
pub use crate::upscale::upscale;
