#![deny(missing_docs)]
//! Image types used by the fitscale resizing crates

/// image representation for resizing purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
