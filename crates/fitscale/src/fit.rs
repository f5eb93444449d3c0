use fitscale_image::ImageSize;

use crate::config::ScaleBounds;
use crate::error::{ensure_valid_size, ResizeError};

/// Aspect ratios closer than this are considered equal and the canvas is filled.
pub const ASPECT_RATIO_TOLERANCE: f64 = 0.1;

/// Result of fitting an image into a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitResult {
    /// The target size of the image.
    pub size: ImageSize,
    /// The effective scale factor `size.width / source.width`, after clamping.
    pub scale: f64,
    /// True when the scale was clamped by the [`ScaleBounds`]; the result may
    /// then no longer fit inside the canvas.
    pub clamped: bool,
}

/// Compute the size an image should be resized to so that it fits a canvas.
///
/// When the aspect ratios of image and canvas differ by less than
/// [`ASPECT_RATIO_TOLERANCE`] the canvas is filled exactly. Otherwise the image is
/// fitted on its relatively larger axis and the other axis is derived from the
/// source aspect ratio (floored). Finally the scale is clamped to `bounds`, in
/// which case the size is recomputed from the source size.
///
/// # Arguments
///
/// * `source` - The size of the source image.
/// * `canvas` - The size of the canvas.
/// * `bounds` - The allowed range of scale factors.
///
/// # Errors
///
/// * [`ResizeError::DegenerateAspectRatio`] if a height is zero.
/// * [`ResizeError::InvalidDimension`] if a width is zero.
///
/// # Example
///
/// ```
/// use fitscale::{fit, ScaleBounds};
/// use fitscale_image::ImageSize;
///
/// let result = fit(
///     ImageSize { width: 800, height: 600 },
///     ImageSize { width: 400, height: 300 },
///     ScaleBounds::default(),
/// )
/// .unwrap();
///
/// assert_eq!(result.size, ImageSize { width: 400, height: 300 });
/// assert_eq!(result.scale, 0.5);
/// ```
pub fn fit(
    source: ImageSize,
    canvas: ImageSize,
    bounds: ScaleBounds,
) -> Result<FitResult, ResizeError> {
    for size in [source, canvas] {
        if size.height == 0 {
            return Err(ResizeError::DegenerateAspectRatio(size));
        }
        ensure_valid_size(size)?;
    }

    let (source_w, source_h) = (source.width as f64, source.height as f64);
    let (canvas_w, canvas_h) = (canvas.width as f64, canvas.height as f64);

    let img_ratio = source_w / source_h;
    let canvas_ratio = canvas_w / canvas_h;

    let fitted = if (img_ratio - canvas_ratio).abs() < ASPECT_RATIO_TOLERANCE {
        canvas
    } else if img_ratio > canvas_ratio {
        // image is relatively wider, fit by width
        ImageSize {
            width: canvas.width,
            height: floor_dim(canvas_w / img_ratio),
        }
    } else {
        ImageSize {
            width: floor_dim(canvas_h * img_ratio),
            height: canvas.height,
        }
    };

    let scale = fitted.width as f64 / source_w;

    let clamped_scale = if scale < bounds.min_scale() {
        Some(bounds.min_scale())
    } else if scale > bounds.max_scale() {
        Some(bounds.max_scale())
    } else {
        None
    };

    let result = match clamped_scale {
        Some(scale) => FitResult {
            size: ImageSize {
                width: floor_dim(source_w * scale),
                height: floor_dim(source_h * scale),
            },
            scale,
            clamped: true,
        },
        None => FitResult {
            size: fitted,
            scale,
            clamped: false,
        },
    };

    log::debug!(
        "fit {source} into {canvas}: {} (scale {:.3}, clamped: {})",
        result.size,
        result.scale,
        result.clamped
    );

    Ok(result)
}

/// [`fit`] with the default [`ScaleBounds`] of `[0.5, 2.0]`.
pub fn fit_default(source: ImageSize, canvas: ImageSize) -> Result<FitResult, ResizeError> {
    fit(source, canvas, ScaleBounds::default())
}

/// Floor a positive dimension, never going below one pixel.
fn floor_dim(value: f64) -> usize {
    (value.floor() as usize).max(1)
}
