//! Adaptive resizing: pick a strategy from the scale ratio and run it.

use std::fmt;

use fitscale_image::{Image, ImageSize};
use fitscale_imgproc::interpolation::InterpolationMode;

use crate::config::ResizeConfig;
use crate::error::{ensure_valid_size, ResizeError};
use crate::plan::{Enhancement, ResizePlan};
use crate::resampler::{FastResampler, Resampler};

/// How an image is brought to its target size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeStrategy {
    /// Source and target sizes are equal, the image is copied.
    Identity,
    /// Multi-stage detail-preserving downscale.
    Downscale,
    /// Multi-stage detail-preserving upscale.
    Upscale,
    /// A single resampling pass with the given interpolation.
    Direct(InterpolationMode),
}

impl fmt::Display for ResizeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResizeStrategy::Identity => write!(f, "identity"),
            ResizeStrategy::Downscale => write!(f, "downscale"),
            ResizeStrategy::Upscale => write!(f, "upscale"),
            ResizeStrategy::Direct(mode) => write!(f, "direct {mode}"),
        }
    }
}

/// Choose the resize strategy for going from `src` to `dst`.
///
/// The direction is decided on the area ratio `(dst.w * dst.h) / (src.w * src.h)`
/// rather than per axis, so a resize that shrinks one axis and grows the other is
/// routed by its net change in pixel count.
///
/// PRECONDITION: both sizes are non-empty.
pub fn select_strategy(src: ImageSize, dst: ImageSize, preserve_detail: bool) -> ResizeStrategy {
    if src == dst {
        return ResizeStrategy::Identity;
    }

    let scale_ratio = dst.area() as f64 / src.area() as f64;
    let shrinking = scale_ratio < 1.0;

    match (preserve_detail, shrinking) {
        (true, true) => ResizeStrategy::Downscale,
        (true, false) => ResizeStrategy::Upscale,
        (false, true) => ResizeStrategy::Direct(InterpolationMode::Area),
        (false, false) => ResizeStrategy::Direct(InterpolationMode::Bicubic),
    }
}

/// Multi-stage image resizer.
///
/// Holds the resampling policy and the [`Resampler`] the pixel work is delegated to.
/// A resizer holds no per-call state and can be shared between threads when its
/// resampler can.
///
/// # Example
///
/// ```
/// use fitscale::SmartResizer;
/// use fitscale_image::{Image, ImageSize};
///
/// let image = Image::<u8, 3>::from_size_val(ImageSize { width: 64, height: 48 }, 128).unwrap();
///
/// let resizer: SmartResizer = SmartResizer::default();
/// let resized = resizer
///     .resize(&image, ImageSize { width: 16, height: 12 }, true)
///     .unwrap();
///
/// assert_eq!(resized.size(), ImageSize { width: 16, height: 12 });
/// ```
#[derive(Debug, Clone)]
pub struct SmartResizer<R = FastResampler> {
    config: ResizeConfig,
    resampler: R,
}

impl SmartResizer<FastResampler> {
    /// Create a resizer backed by [`FastResampler`].
    pub fn new(config: ResizeConfig) -> Self {
        Self::with_resampler(config, FastResampler)
    }
}

impl Default for SmartResizer<FastResampler> {
    fn default() -> Self {
        Self::new(ResizeConfig::default())
    }
}

impl<R: Resampler> SmartResizer<R> {
    /// Create a resizer with a custom [`Resampler`].
    pub fn with_resampler(config: ResizeConfig, resampler: R) -> Self {
        Self { config, resampler }
    }

    /// The resampling policy.
    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    /// The resampler used for the pixel work.
    pub fn resampler(&self) -> &R {
        &self.resampler
    }

    /// Resize `src` to `size`.
    ///
    /// With `preserve_detail` the multi-stage [`SmartResizer::downscale`] or
    /// [`SmartResizer::upscale`] is used, otherwise a single area (shrinking) or
    /// bicubic (growing) pass. See [`select_strategy`] for the routing rules.
    ///
    /// # Errors
    ///
    /// Fails with [`ResizeError::InvalidDimension`] before any pixel work if the
    /// source or target size is empty.
    pub fn resize<const C: usize>(
        &self,
        src: &Image<u8, C>,
        size: ImageSize,
        preserve_detail: bool,
    ) -> Result<Image<u8, C>, ResizeError> {
        ensure_valid_size(src.size())?;
        ensure_valid_size(size)?;

        let strategy = select_strategy(src.size(), size, preserve_detail);
        log::debug!("resize {} -> {size} with strategy {strategy}", src.size());

        match strategy {
            ResizeStrategy::Identity => Ok(src.clone()),
            ResizeStrategy::Downscale => self.downscale(src, size),
            ResizeStrategy::Upscale => self.upscale(src, size),
            ResizeStrategy::Direct(mode) => Ok(self.resampler.resample(src, size, mode)?),
        }
    }

    /// Run the resampling steps of `plan` on `src` and apply its enhancement.
    pub(crate) fn execute<const C: usize>(
        &self,
        src: &Image<u8, C>,
        plan: &ResizePlan,
    ) -> Result<Image<u8, C>, ResizeError> {
        let mut current: Option<Image<u8, C>> = None;

        for (i, step) in plan.steps.iter().enumerate() {
            let input = current.as_ref().unwrap_or(src);
            log::trace!(
                "step {}/{}: {} -> {} ({})",
                i + 1,
                plan.steps.len(),
                input.size(),
                step.size,
                step.mode
            );
            current = Some(self.resampler.resample(input, step.size, step.mode)?);
        }

        let resampled = match current {
            Some(image) => image,
            None => src.clone(),
        };

        match plan.enhancement {
            Enhancement::None => Ok(resampled),
            Enhancement::Sharpen => self.sharpen(&resampled),
            Enhancement::EdgeOverlay => self.overlay_edges(&resampled),
        }
    }
}

/// Resize `src` to `size` with the default [`SmartResizer`].
///
/// See [`SmartResizer::resize`].
pub fn adaptive_resize<const C: usize>(
    src: &Image<u8, C>,
    size: ImageSize,
    preserve_detail: bool,
) -> Result<Image<u8, C>, ResizeError> {
    SmartResizer::new(ResizeConfig::default()).resize(src, size, preserve_detail)
}
