use fitscale_image::{Image, ImageSize};
use fitscale_imgproc::color::replicate_channels;

use crate::config::ResizeConfig;
use crate::error::{ensure_valid_size, ResizeError};
use crate::plan::upscale_plan;
use crate::resampler::Resampler;
use crate::resize::SmartResizer;

impl<R: Resampler> SmartResizer<R> {
    /// Upscale `src` to `size`, preserving detail.
    ///
    /// Small factors are handled by a single Lanczos pass. Larger factors follow
    /// [`upscale_plan`]: bicubic doubling until an axis is close to its target, a
    /// final Lanczos pass, and a light overlay of the edge map of the result.
    ///
    /// # Errors
    ///
    /// Fails with [`ResizeError::InvalidDimension`] if the source or target size is
    /// empty.
    pub fn upscale<const C: usize>(
        &self,
        src: &Image<u8, C>,
        size: ImageSize,
    ) -> Result<Image<u8, C>, ResizeError> {
        ensure_valid_size(src.size())?;
        ensure_valid_size(size)?;

        let plan = upscale_plan(src.size(), size, self.config());
        log::debug!(
            "upscale {} -> {size} in {} steps, enhancement {:?}",
            src.size(),
            plan.steps.len(),
            plan.enhancement
        );

        self.execute(src, &plan)
    }

    /// Blend `image` with its edge map, replicated over all channels.
    pub(crate) fn overlay_edges<const C: usize>(
        &self,
        image: &Image<u8, C>,
    ) -> Result<Image<u8, C>, ResizeError> {
        let config = self.config();
        let thresholds = config.edge_thresholds;

        let edge_map = self
            .resampler()
            .edge_detect(image, thresholds.low, thresholds.high)?;

        let mut expanded = Image::<u8, C>::from_size_val(image.size(), 0)?;
        replicate_channels(&edge_map, &mut expanded)?;

        let blended = self.resampler().blend(
            image,
            config.edge_blend.base,
            &expanded,
            config.edge_blend.detail,
        )?;
        Ok(blended)
    }
}

/// Upscale `src` to `size` with the default policy.
///
/// See [`SmartResizer::upscale`].
pub fn upscale<const C: usize>(
    src: &Image<u8, C>,
    size: ImageSize,
) -> Result<Image<u8, C>, ResizeError> {
    SmartResizer::new(ResizeConfig::default()).upscale(src, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitscale_imgproc::interpolation::InterpolationMode;

    use crate::config::BlendWeights;
    use crate::plan::ResampleStep;
    use crate::testing::{checkerboard, RecordingResampler};

    #[test]
    fn upscale_output_size_all_channels() -> Result<(), ResizeError> {
        let size = ImageSize::from([10, 8]);
        let target = ImageSize::from([45, 33]);

        assert_eq!(upscale(&checkerboard::<1>(size, 2)?, target)?.size(), target);
        assert_eq!(upscale(&checkerboard::<2>(size, 2)?, target)?.size(), target);
        assert_eq!(upscale(&checkerboard::<3>(size, 2)?, target)?.size(), target);
        assert_eq!(upscale(&checkerboard::<4>(size, 2)?, target)?.size(), target);
        Ok(())
    }

    #[test]
    fn upscale_runs_planned_steps() -> Result<(), ResizeError> {
        let resizer =
            SmartResizer::with_resampler(ResizeConfig::default(), RecordingResampler::default());
        let src = checkerboard::<3>([25, 20].into(), 5)?;

        let dst = resizer.upscale(&src, [100, 80].into())?;
        assert_eq!(dst.size(), ImageSize::from([100, 80]));

        let steps = resizer.resampler().steps.borrow();
        assert_eq!(
            *steps,
            vec![
                ResampleStep {
                    size: [50, 40].into(),
                    mode: InterpolationMode::Bicubic,
                },
                ResampleStep {
                    size: [100, 80].into(),
                    mode: InterpolationMode::Bicubic,
                },
                ResampleStep {
                    size: [100, 80].into(),
                    mode: InterpolationMode::Lanczos,
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn upscale_small_factor_is_not_enhanced() -> Result<(), ResizeError> {
        let resizer =
            SmartResizer::with_resampler(ResizeConfig::default(), RecordingResampler::default());
        let src = Image::<u8, 3>::from_size_val([10, 10].into(), 100)?;

        let dst = resizer.upscale(&src, [15, 19].into())?;
        assert_eq!(resizer.resampler().steps.borrow().len(), 1);
        assert!(dst.as_slice().iter().all(|&v| (99..=101).contains(&v)));
        Ok(())
    }

    #[test]
    fn upscale_flat_image_is_dimmed_by_overlay() -> Result<(), ResizeError> {
        // a flat image has no edges, only the resampled weight remains
        let src = Image::<u8, 1>::from_size_val([10, 10].into(), 100)?;
        let dst = upscale(&src, [40, 40].into())?;
        assert!(dst.as_slice().iter().all(|&v| (93..=97).contains(&v)));
        Ok(())
    }

    #[test]
    fn upscale_overlays_edges() -> Result<(), ResizeError> {
        let src = checkerboard::<3>([16, 16].into(), 4)?;
        let target = ImageSize::from([64, 64]);

        let config = ResizeConfig {
            edge_blend: BlendWeights {
                base: 1.0,
                detail: 0.0,
            },
            ..Default::default()
        };
        let plain = SmartResizer::new(config).upscale(&src, target)?;
        let enhanced = upscale(&src, target)?;

        assert_eq!(plain.size(), enhanced.size());
        let brighter = plain
            .as_slice()
            .iter()
            .zip(enhanced.as_slice())
            .any(|(&p, &e)| e > p);
        assert!(brighter, "no edge pixel was brightened");
        Ok(())
    }

    #[test]
    fn upscale_rejects_empty_target() -> Result<(), ResizeError> {
        let src = checkerboard::<1>([4, 4].into(), 1)?;
        assert_eq!(
            upscale(&src, [0, 8].into()),
            Err(ResizeError::InvalidDimension {
                width: 0,
                height: 8
            })
        );
        Ok(())
    }
}
