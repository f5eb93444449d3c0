//! Fixtures shared by the unit tests.

use std::cell::RefCell;

use fitscale_image::{Image, ImageError, ImageSize};
use fitscale_imgproc::{filter::kernels::Kernel3x3, interpolation::InterpolationMode};

use crate::plan::ResampleStep;
use crate::resampler::{FastResampler, Resampler};

/// Records every resampling step and forwards the work to [`FastResampler`].
#[derive(Default)]
pub(crate) struct RecordingResampler {
    pub steps: RefCell<Vec<ResampleStep>>,
}

impl Resampler for RecordingResampler {
    fn resample<const C: usize>(
        &self,
        src: &Image<u8, C>,
        size: ImageSize,
        mode: InterpolationMode,
    ) -> Result<Image<u8, C>, ImageError> {
        self.steps.borrow_mut().push(ResampleStep { size, mode });
        FastResampler.resample(src, size, mode)
    }

    fn edge_detect<const C: usize>(
        &self,
        src: &Image<u8, C>,
        low_threshold: f32,
        high_threshold: f32,
    ) -> Result<Image<u8, 1>, ImageError> {
        FastResampler.edge_detect(src, low_threshold, high_threshold)
    }

    fn convolve<const C: usize>(
        &self,
        src: &Image<u8, C>,
        kernel: &Kernel3x3,
    ) -> Result<Image<u8, C>, ImageError> {
        FastResampler.convolve(src, kernel)
    }

    fn blend<const C: usize>(
        &self,
        a: &Image<u8, C>,
        weight_a: f32,
        b: &Image<u8, C>,
        weight_b: f32,
    ) -> Result<Image<u8, C>, ImageError> {
        FastResampler.blend(a, weight_a, b, weight_b)
    }
}

pub(crate) fn checkerboard<const C: usize>(
    size: ImageSize,
    cell: usize,
) -> Result<Image<u8, C>, ImageError> {
    let mut data = Vec::with_capacity(size.area() * C);
    for y in 0..size.height {
        for x in 0..size.width {
            let v = if (x / cell + y / cell) % 2 == 0 { 40 } else { 200 };
            data.extend(std::iter::repeat(v).take(C));
        }
    }
    Image::new(size, data)
}
