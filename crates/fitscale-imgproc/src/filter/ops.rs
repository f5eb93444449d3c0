use fitscale_image::{Image, ImageError};

use super::kernels::Kernel3x3;
use crate::parallel;

/// Border handling modes for neighbourhood filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderType {
    /// Replicate the value of the nearest border pixel.
    /// Corresponds to OpenCV's `BORDER_REPLICATE`.
    Replicate,

    /// Reflect the image across the border, excluding the border pixel.
    /// Corresponds to OpenCV's `BORDER_REFLECT_101`, the OpenCV default.
    #[default]
    Reflect101,
}

impl BorderType {
    /// Map a possibly out-of-range index into `[0, len)`.
    ///
    /// Only valid for offsets of at most one pixel outside the image.
    fn resolve(self, idx: isize, len: usize) -> usize {
        let len = len as isize;
        let mapped = match self {
            BorderType::Replicate => idx.clamp(0, len - 1),
            BorderType::Reflect101 => {
                if idx < 0 {
                    -idx
                } else if idx >= len {
                    2 * len - idx - 2
                } else {
                    idx
                }
            }
        };
        // single pixel images have nothing to reflect onto
        mapped.clamp(0, len - 1) as usize
    }
}

/// Convolve an 8-bit image with a 3x3 kernel.
///
/// Each channel is filtered independently. Accumulation happens in `f32` and the
/// result is rounded and saturated to `[0, 255]`, so kernels with negative weights
/// never wrap around. The kernel is applied as a correlation, i.e. without flipping,
/// which is the same for the symmetric kernels used here.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel` - The 3x3 kernel, indexed as `kernel[dy][dx]`.
/// * `border` - How pixels outside the image are sampled.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
///
/// # Example
///
/// ```
/// use fitscale_image::{Image, ImageSize};
/// use fitscale_imgproc::filter::{filter2d_3x3, kernels, BorderType};
///
/// let image = Image::<u8, 1>::from_size_val(ImageSize { width: 3, height: 3 }, 100).unwrap();
/// let mut sharpened = Image::<u8, 1>::from_size_val(image.size(), 0).unwrap();
///
/// filter2d_3x3(&image, &mut sharpened, &kernels::sharpen_kernel_3x3(), BorderType::Reflect101)
///     .unwrap();
///
/// assert!(sharpened.as_slice().iter().all(|&v| v == 100));
/// ```
pub fn filter2d_3x3<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    kernel: &Kernel3x3,
    border: BorderType,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    let (width, height) = (src.width(), src.height());
    let src_data = src.as_slice();

    parallel::par_rows_mut(dst, |row, dst_row| {
        let rows = [
            border.resolve(row as isize - 1, height),
            row,
            border.resolve(row as isize + 1, height),
        ];

        for col in 0..width {
            let cols = [
                border.resolve(col as isize - 1, width),
                col,
                border.resolve(col as isize + 1, width),
            ];

            let mut sum = [0.0f32; C];
            for (ky, &r) in rows.iter().enumerate() {
                for (kx, &c) in cols.iter().enumerate() {
                    let offset = (r * width + c) * C;
                    let weight = kernel[ky][kx];
                    for (acc, &val) in sum.iter_mut().zip(&src_data[offset..offset + C]) {
                        *acc += weight * val as f32;
                    }
                }
            }

            for (out, acc) in dst_row[col * C..(col + 1) * C].iter_mut().zip(sum) {
                *out = acc.round().clamp(0.0, 255.0) as u8;
            }
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::kernels;
    use fitscale_image::ImageSize;

    #[test]
    fn test_border_resolve() {
        assert_eq!(BorderType::Reflect101.resolve(-1, 5), 1);
        assert_eq!(BorderType::Reflect101.resolve(5, 5), 3);
        assert_eq!(BorderType::Reflect101.resolve(-1, 1), 0);
        assert_eq!(BorderType::Reflect101.resolve(1, 1), 0);
        assert_eq!(BorderType::Replicate.resolve(-1, 5), 0);
        assert_eq!(BorderType::Replicate.resolve(5, 5), 4);
    }

    #[test]
    fn test_identity_kernel() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 4,
            height: 3,
        };
        let src = Image::<u8, 3>::new(size, (0..36).map(|v| v * 7).collect())?;
        let mut dst = Image::<u8, 3>::from_size_val(size, 0)?;

        filter2d_3x3(
            &src,
            &mut dst,
            &kernels::identity_kernel_3x3(),
            BorderType::Reflect101,
        )?;

        assert_eq!(dst.as_slice(), src.as_slice());
        Ok(())
    }

    #[test]
    fn test_sharpen_saturates() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let src = Image::<u8, 1>::new(
            [3, 3].into(),
            vec![
                0, 0, 0,
                0, 200, 0,
                0, 0, 0,
            ],
        )?;
        let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0)?;

        filter2d_3x3(
            &src,
            &mut dst,
            &kernels::sharpen_kernel_3x3(),
            BorderType::Replicate,
        )?;

        // 9 * 200 overflows, neighbours go negative
        assert_eq!(dst.get([1, 1, 0]), Some(&255));
        assert_eq!(dst.get([0, 0, 0]), Some(&0));
        Ok(())
    }

    #[test]
    fn test_size_mismatch() -> Result<(), ImageError> {
        let src = Image::<u8, 1>::from_size_val([3, 3].into(), 0)?;
        let mut dst = Image::<u8, 1>::from_size_val([2, 3].into(), 0)?;
        let res = filter2d_3x3(
            &src,
            &mut dst,
            &kernels::sharpen_kernel_3x3(),
            BorderType::Reflect101,
        );
        assert_eq!(res, Err(ImageError::InvalidImageSize(3, 3, 2, 3)));
        Ok(())
    }
}
