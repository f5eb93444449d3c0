/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the image size is not valid.
    #[error("Invalid image size ({0}, {1}) mismatch ({2}, {3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the operation does not support the number of channels.
    #[error("Unsupported number of channels: {0}")]
    UnsupportedChannels(usize),

    /// Error when casting a pixel value fails.
    #[error("Failed to cast image data")]
    CastError,

    /// Error raised by the resampling backend.
    #[error("Resampling failed: {0}")]
    ResampleFailed(String),

    /// Error raised by the edge detection backend.
    #[error("Edge detection failed: {0}")]
    EdgeDetectionFailed(String),
}
