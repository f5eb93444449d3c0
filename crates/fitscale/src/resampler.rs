//! The imaging capability the resizers are built on.

use fitscale_image::{Image, ImageError, ImageSize};
use fitscale_imgproc::{
    color, edges, enhance,
    filter::{self, kernels::Kernel3x3, BorderType},
    interpolation::InterpolationMode,
    resize,
};

/// Pixel operations required by the multi-stage resizers.
///
/// Every operation returns a newly allocated image and leaves its inputs untouched.
pub trait Resampler {
    /// Resample `src` to `size` with the given interpolation.
    fn resample<const C: usize>(
        &self,
        src: &Image<u8, C>,
        size: ImageSize,
        mode: InterpolationMode,
    ) -> Result<Image<u8, C>, ImageError>;

    /// Compute a single channel edge map of `src` with hysteresis thresholds on the
    /// 8-bit scale.
    fn edge_detect<const C: usize>(
        &self,
        src: &Image<u8, C>,
        low_threshold: f32,
        high_threshold: f32,
    ) -> Result<Image<u8, 1>, ImageError>;

    /// Convolve `src` with a 3x3 kernel, keeping its size.
    fn convolve<const C: usize>(
        &self,
        src: &Image<u8, C>,
        kernel: &Kernel3x3,
    ) -> Result<Image<u8, C>, ImageError>;

    /// Compute `weight_a * a + weight_b * b` per sample, saturated to the 8-bit range.
    fn blend<const C: usize>(
        &self,
        a: &Image<u8, C>,
        weight_a: f32,
        b: &Image<u8, C>,
        weight_b: f32,
    ) -> Result<Image<u8, C>, ImageError>;
}

/// [`Resampler`] backed by `fitscale-imgproc`.
///
/// Resampling goes through `fast_image_resize`, edges through the `imageproc` Canny
/// detector on the luminance of the image, and convolutions use a reflect-101 border.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastResampler;

impl Resampler for FastResampler {
    fn resample<const C: usize>(
        &self,
        src: &Image<u8, C>,
        size: ImageSize,
        mode: InterpolationMode,
    ) -> Result<Image<u8, C>, ImageError> {
        resize::resize_to(src, size, mode)
    }

    fn edge_detect<const C: usize>(
        &self,
        src: &Image<u8, C>,
        low_threshold: f32,
        high_threshold: f32,
    ) -> Result<Image<u8, 1>, ImageError> {
        let mut gray = Image::<u8, 1>::from_size_val(src.size(), 0)?;
        color::gray_from_channels_u8(src, &mut gray)?;

        let mut edge_map = Image::<u8, 1>::from_size_val(src.size(), 0)?;
        edges::canny(&gray, &mut edge_map, low_threshold, high_threshold)?;

        Ok(edge_map)
    }

    fn convolve<const C: usize>(
        &self,
        src: &Image<u8, C>,
        kernel: &Kernel3x3,
    ) -> Result<Image<u8, C>, ImageError> {
        let mut dst = Image::<u8, C>::from_size_val(src.size(), 0)?;
        filter::filter2d_3x3(src, &mut dst, kernel, BorderType::Reflect101)?;
        Ok(dst)
    }

    fn blend<const C: usize>(
        &self,
        a: &Image<u8, C>,
        weight_a: f32,
        b: &Image<u8, C>,
        weight_b: f32,
    ) -> Result<Image<u8, C>, ImageError> {
        let mut dst = Image::<u8, C>::from_size_val(a.size(), 0)?;
        enhance::add_weighted(a, weight_a, b, weight_b, 0.0, &mut dst)?;
        Ok(dst)
    }
}
