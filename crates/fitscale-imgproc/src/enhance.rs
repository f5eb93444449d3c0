use fitscale_image::{Image, ImageError};

use crate::parallel;

/// Performs a saturating weighted addition of two 8-bit images `src1` and `src2`
/// with weights `alpha` and `beta`, and a scalar `gamma`. The formula used is:
///
/// dst(x,y,c) = saturate(round(src1(x,y,c) * alpha + src2(x,y,c) * beta + gamma))
///
/// The result is always within `[0, 255]`, whatever the weights.
///
/// # Arguments
///
/// * `src1` - The first input image.
/// * `alpha` - Weight of the first image elements to be multiplied.
/// * `src2` - The second input image.
/// * `beta` - Weight of the second image elements to be multiplied.
/// * `gamma` - Scalar added to each sum.
/// * `dst` - The output image.
///
/// # Errors
///
/// Returns an error if the sizes of `src1`, `src2` and `dst` do not match.
///
/// # Example
///
/// ```
/// use fitscale_image::{Image, ImageSize};
/// use fitscale_imgproc::enhance::add_weighted;
///
/// let size = ImageSize { width: 2, height: 1 };
/// let a = Image::<u8, 1>::new(size, vec![100, 250]).unwrap();
/// let b = Image::<u8, 1>::new(size, vec![200, 250]).unwrap();
/// let mut out = Image::<u8, 1>::from_size_val(size, 0).unwrap();
///
/// add_weighted(&a, 0.5, &b, 0.5, 0.0, &mut out).unwrap();
/// assert_eq!(out.as_slice(), &[150, 250]);
/// ```
pub fn add_weighted<const C: usize>(
    src1: &Image<u8, C>,
    alpha: f32,
    src2: &Image<u8, C>,
    beta: f32,
    gamma: f32,
    dst: &mut Image<u8, C>,
) -> Result<(), ImageError> {
    if src1.size() != src2.size() {
        return Err(ImageError::InvalidImageSize(
            src1.cols(),
            src1.rows(),
            src2.cols(),
            src2.rows(),
        ));
    }

    if src1.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src1.width(),
            src1.height(),
            dst.width(),
            dst.height(),
        ));
    }

    // compute the weighted sum
    parallel::par_iter_rows_val_two(src1, src2, dst, |&a, &b, out| {
        let val = a as f32 * alpha + b as f32 * beta + gamma;
        *out = val.round().clamp(0.0, 255.0) as u8;
    });

    Ok(())
}
