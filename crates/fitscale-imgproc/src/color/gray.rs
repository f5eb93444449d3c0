use crate::parallel;
use fitscale_image::{Image, ImageError};

/// Convert an 8-bit image with any supported channel count to grayscale.
///
/// * 1 channel: copied as is.
/// * 2 channels: gray plus alpha, the gray channel is kept.
/// * 3 or 4 channels: RGB(A), luminance `Y = (77 * R + 150 * G + 29 * B) >> 8` of the
///   first three channels, alpha ignored.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use fitscale_image::{Image, ImageSize};
/// use fitscale_imgproc::color::gray_from_channels_u8;
///
/// let size = ImageSize { width: 1, height: 1 };
/// let rgba = Image::<u8, 4>::new(size, vec![255, 255, 255, 0]).unwrap();
/// let mut gray = Image::<u8, 1>::from_size_val(size, 0).unwrap();
///
/// gray_from_channels_u8(&rgba, &mut gray).unwrap();
/// assert_eq!(gray.as_slice(), &[255]);
/// ```
pub fn gray_from_channels_u8<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, 1>,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    match C {
        1 | 2 => parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
            dst_pixel[0] = src_pixel[0];
        }),
        3 | 4 => parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
            let r = src_pixel[0] as u16;
            let g = src_pixel[1] as u16;
            let b = src_pixel[2] as u16;
            // the weights sum to 256, so the shifted value always fits in a u8
            dst_pixel[0] = ((r * 77 + g * 150 + b * 29) >> 8) as u8;
        }),
        _ => return Err(ImageError::UnsupportedChannels(C)),
    }

    Ok(())
}

/// Expand a single channel image to `C` channels by replicating every value.
///
/// This is the explicit counterpart of [`gray_from_channels_u8`] and works for
/// any channel count, including `C == 1`.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use fitscale_image::{Image, ImageSize};
/// use fitscale_imgproc::color::replicate_channels;
///
/// let size = ImageSize { width: 2, height: 1 };
/// let gray = Image::<u8, 1>::new(size, vec![0, 255]).unwrap();
/// let mut rgb = Image::<u8, 3>::from_size_val(size, 1).unwrap();
///
/// replicate_channels(&gray, &mut rgb).unwrap();
/// assert_eq!(rgb.as_slice(), &[0, 0, 0, 255, 255, 255]);
/// ```
pub fn replicate_channels<T, const C: usize>(
    src: &Image<T, 1>,
    dst: &mut Image<T, C>,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        dst_pixel.fill(src_pixel[0]);
    });

    Ok(())
}
