use fitscale_image::{Image, ImageError};

/// Detect edges in a grayscale image with the Canny detector.
///
/// Backed by [`imageproc::edges::canny`], which smooths the input with a small
/// gaussian before computing gradients. Pixels above `high_threshold` seed edges,
/// which are then extended through pixels above `low_threshold`.
///
/// # Arguments
///
/// * `src` - The input grayscale image.
/// * `dst` - The output edge map, 255 on edges and 0 elsewhere.
/// * `low_threshold` - Hysteresis low threshold on the 8-bit scale.
/// * `high_threshold` - Hysteresis high threshold on the 8-bit scale.
///
/// # Example
///
/// ```
/// use fitscale_image::{Image, ImageSize};
/// use fitscale_imgproc::edges::canny;
///
/// let size = ImageSize { width: 8, height: 8 };
/// let flat = Image::<u8, 1>::from_size_val(size, 90).unwrap();
/// let mut edges = Image::<u8, 1>::from_size_val(size, 1).unwrap();
///
/// canny(&flat, &mut edges, 50.0, 150.0).unwrap();
/// assert!(edges.as_slice().iter().all(|&v| v == 0));
/// ```
pub fn canny(
    src: &Image<u8, 1>,
    dst: &mut Image<u8, 1>,
    low_threshold: f32,
    high_threshold: f32,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    if low_threshold > high_threshold {
        return Err(ImageError::EdgeDetectionFailed(format!(
            "low threshold {low_threshold} is above high threshold {high_threshold}"
        )));
    }

    let width = u32::try_from(src.width()).map_err(|_| ImageError::CastError)?;
    let height = u32::try_from(src.height()).map_err(|_| ImageError::CastError)?;

    let gray = image::GrayImage::from_raw(width, height, src.as_slice().to_vec()).ok_or_else(
        || ImageError::EdgeDetectionFailed("buffer does not match image size".to_string()),
    )?;

    let edges = imageproc::edges::canny(&gray, low_threshold, high_threshold);

    dst.as_slice_mut().copy_from_slice(edges.as_raw());

    Ok(())
}
