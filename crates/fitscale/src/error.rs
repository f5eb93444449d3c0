use fitscale_image::{ImageError, ImageSize};

/// An error type for the resizing operations.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ResizeError {
    /// A width or height of zero was supplied to an entry point.
    #[error("Invalid dimension {width}x{height}, width and height must be positive")]
    InvalidDimension {
        /// The offending width.
        width: usize,
        /// The offending height.
        height: usize,
    },

    /// The aspect ratio cannot be computed because the height is zero.
    #[error("Degenerate aspect ratio for size {0}, height must be positive")]
    DegenerateAspectRatio(ImageSize),

    /// The scale bounds are not positive, not finite or inverted.
    #[error("Invalid scale bounds [{min}, {max}]")]
    InvalidScaleBounds {
        /// The requested lower bound.
        min: f64,
        /// The requested upper bound.
        max: f64,
    },

    /// Error from the image layer.
    #[error("Image error: {0}")]
    Image(#[from] ImageError),
}

/// Check that both dimensions of `size` are positive.
pub(crate) fn ensure_valid_size(size: ImageSize) -> Result<(), ResizeError> {
    if size.is_empty() {
        return Err(ResizeError::InvalidDimension {
            width: size.width,
            height: size.height,
        });
    }
    Ok(())
}
