use fitscale_image::{Image, ImageSize};

use crate::config::ResizeConfig;
use crate::error::{ensure_valid_size, ResizeError};
use crate::plan::downscale_plan;
use crate::resampler::Resampler;
use crate::resize::SmartResizer;

impl<R: Resampler> SmartResizer<R> {
    /// Downscale `src` to `size`, preserving detail.
    ///
    /// Runs the steps of [`downscale_plan`]: repeated area-average halving followed
    /// by a final area pass (or a single bilinear pass for near-identity ratios), then
    /// blends the result with a sharpened copy of itself. A target larger than the
    /// source on either axis is handled by [`SmartResizer::upscale`].
    ///
    /// # Errors
    ///
    /// Fails with [`ResizeError::InvalidDimension`] if the source or target size is
    /// empty.
    pub fn downscale<const C: usize>(
        &self,
        src: &Image<u8, C>,
        size: ImageSize,
    ) -> Result<Image<u8, C>, ResizeError> {
        ensure_valid_size(src.size())?;
        ensure_valid_size(size)?;

        let plan = downscale_plan(src.size(), size, self.config());
        log::debug!(
            "downscale {} -> {size} in {} steps, enhancement {:?}",
            src.size(),
            plan.steps.len(),
            plan.enhancement
        );

        self.execute(src, &plan)
    }

    /// Blend `image` with its sharpened copy using the configured weights.
    pub(crate) fn sharpen<const C: usize>(
        &self,
        image: &Image<u8, C>,
    ) -> Result<Image<u8, C>, ResizeError> {
        let config = self.config();
        let sharpened = self.resampler().convolve(image, &config.sharpen_kernel)?;
        let blended = self.resampler().blend(
            image,
            config.sharpen_blend.base,
            &sharpened,
            config.sharpen_blend.detail,
        )?;
        Ok(blended)
    }
}

/// Downscale `src` to `size` with the default policy.
///
/// See [`SmartResizer::downscale`].
pub fn downscale<const C: usize>(
    src: &Image<u8, C>,
    size: ImageSize,
) -> Result<Image<u8, C>, ResizeError> {
    SmartResizer::new(ResizeConfig::default()).downscale(src, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitscale_imgproc::{filter::kernels::identity_kernel_3x3, interpolation::InterpolationMode};

    use crate::plan::ResampleStep;
    use crate::testing::{checkerboard, RecordingResampler};

    #[test]
    fn downscale_output_size_all_channels() -> Result<(), ResizeError> {
        let size = ImageSize::from([97, 65]);
        let target = ImageSize::from([13, 9]);

        assert_eq!(downscale(&checkerboard::<1>(size, 4)?, target)?.size(), target);
        assert_eq!(downscale(&checkerboard::<2>(size, 4)?, target)?.size(), target);
        assert_eq!(downscale(&checkerboard::<3>(size, 4)?, target)?.size(), target);
        assert_eq!(downscale(&checkerboard::<4>(size, 4)?, target)?.size(), target);
        Ok(())
    }

    #[test]
    fn downscale_runs_planned_steps() -> Result<(), ResizeError> {
        let resizer =
            SmartResizer::with_resampler(ResizeConfig::default(), RecordingResampler::default());
        let src = checkerboard::<3>([2000, 1500].into(), 16)?;

        let dst = resizer.downscale(&src, [400, 300].into())?;
        assert_eq!(dst.size(), ImageSize::from([400, 300]));

        let steps = resizer.resampler().steps.borrow();
        let expected = downscale_plan([2000, 1500].into(), [400, 300].into(), resizer.config());
        assert_eq!(*steps, expected.steps);
        assert_eq!(steps.len(), 3);
        Ok(())
    }

    #[test]
    fn downscale_flat_image_stays_flat() -> Result<(), ResizeError> {
        // sharpening a constant image is a no-op
        let src = Image::<u8, 3>::from_size_val([64, 48].into(), 100)?;
        for target in [[62, 47], [20, 15], [3, 2]] {
            let dst = downscale(&src, target.into())?;
            assert!(dst.as_slice().iter().all(|&v| v == 100));
        }
        Ok(())
    }

    #[test]
    fn downscale_near_identity_is_sharpened() -> Result<(), ResizeError> {
        let src = checkerboard::<1>([100, 100].into(), 10)?;
        let target = ImageSize::from([98, 98]);

        let sharpened = downscale(&src, target)?;

        let config = ResizeConfig {
            sharpen_kernel: identity_kernel_3x3(),
            ..Default::default()
        };
        let plain = SmartResizer::new(config).downscale(&src, target)?;

        assert_eq!(sharpened.size(), plain.size());
        assert_ne!(sharpened, plain);
        Ok(())
    }

    #[test]
    fn downscale_with_growing_axis_upscales() -> Result<(), ResizeError> {
        let resizer =
            SmartResizer::with_resampler(ResizeConfig::default(), RecordingResampler::default());
        let src = checkerboard::<1>([40, 40].into(), 5)?;

        let dst = resizer.downscale(&src, [30, 50].into())?;
        assert_eq!(dst.size(), ImageSize::from([30, 50]));

        let steps = resizer.resampler().steps.borrow();
        assert_eq!(
            *steps,
            vec![ResampleStep {
                size: [30, 50].into(),
                mode: InterpolationMode::Lanczos,
            }]
        );
        Ok(())
    }

    #[test]
    fn downscale_thin_image() -> Result<(), ResizeError> {
        let src = checkerboard::<3>([300, 1].into(), 3)?;
        let dst = downscale(&src, [7, 1].into())?;
        assert_eq!(dst.size(), ImageSize::from([7, 1]));
        Ok(())
    }
}
