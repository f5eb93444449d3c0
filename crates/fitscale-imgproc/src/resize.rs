use crate::interpolation::InterpolationMode;
use fast_image_resize as fr;
use fitscale_image::{Image, ImageError, ImageSize};

/// Pixel type of an interleaved 8-bit image with `C` channels.
fn u8_pixel_type<const C: usize>() -> Result<fr::PixelType, ImageError> {
    match C {
        1 => Ok(fr::PixelType::U8),
        2 => Ok(fr::PixelType::U8x2),
        3 => Ok(fr::PixelType::U8x3),
        4 => Ok(fr::PixelType::U8x4),
        _ => Err(ImageError::UnsupportedChannels(C)),
    }
}

fn to_u32(value: usize) -> Result<u32, ImageError> {
    u32::try_from(value).map_err(|_| ImageError::CastError)
}

/// Resize an image to the size of `dst` using the [fast_image_resize](https://crates.io/crates/fast_image_resize) crate.
///
/// Supports u8 images with 1 to 4 channels. Alpha is treated as a regular
/// channel, no premultiplication is performed.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `dst` - The output image container, its size is the target size.
/// * `interpolation` - The interpolation mode to use.
///
/// # Example
///
/// ```
/// use fitscale_image::{Image, ImageSize};
/// use fitscale_imgproc::resize::resize_fast;
/// use fitscale_imgproc::interpolation::InterpolationMode;
///
/// let image = Image::<_, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0u8; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let new_size = ImageSize {
///     width: 2,
///     height: 3,
/// };
///
/// let mut image_resized = Image::<_, 3>::from_size_val(new_size, 0).unwrap();
///
/// resize_fast(&image, &mut image_resized, InterpolationMode::Area).unwrap();
///
/// assert_eq!(image_resized.num_channels(), 3);
/// assert_eq!(image_resized.size().width, 2);
/// assert_eq!(image_resized.size().height, 3);
/// ```
///
/// # Errors
///
/// The function returns an error if either image is empty, the channel count is
/// not supported or the backend fails.
pub fn resize_fast<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    if src.size().is_empty() || dst.size().is_empty() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    let pixel_type = u8_pixel_type::<C>()?;

    let src_image = fr::images::ImageRef::new(
        to_u32(src.width())?,
        to_u32(src.height())?,
        src.as_slice(),
        pixel_type,
    )
    .map_err(|e| ImageError::ResampleFailed(e.to_string()))?;

    let (dst_width, dst_height) = (to_u32(dst.width())?, to_u32(dst.height())?);
    let mut dst_image =
        fr::images::Image::from_slice_u8(dst_width, dst_height, dst.as_slice_mut(), pixel_type)
            .map_err(|e| ImageError::ResampleFailed(e.to_string()))?;

    let options = fr::ResizeOptions::new()
        .resize_alg(interpolation.resize_alg())
        .use_alpha(false);

    let mut resizer = fr::Resizer::new();
    resizer
        .resize(&src_image, &mut dst_image, &options)
        .map_err(|e| ImageError::ResampleFailed(e.to_string()))?;

    Ok(())
}

/// Resize an image into a newly allocated image of `new_size`.
///
/// Convenience wrapper around [`resize_fast`].
pub fn resize_to<const C: usize>(
    src: &Image<u8, C>,
    new_size: ImageSize,
    interpolation: InterpolationMode,
) -> Result<Image<u8, C>, ImageError> {
    let mut dst = Image::<u8, C>::from_size_val(new_size, 0)?;
    resize_fast(src, &mut dst, interpolation)?;
    Ok(dst)
}
