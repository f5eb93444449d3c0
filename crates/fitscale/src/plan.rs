//! Pure planning of multi-stage resizes.
//!
//! A plan is the ordered list of resampling steps plus the enhancement pass
//! applied to the final image. Planning touches no pixel data, so the step
//! sequence of any resize can be inspected up front.

use fitscale_image::ImageSize;
use fitscale_imgproc::interpolation::InterpolationMode;

use crate::config::ResizeConfig;

/// A single resampling step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResampleStep {
    /// Size of the image produced by this step.
    pub size: ImageSize,
    /// Interpolation used for this step.
    pub mode: InterpolationMode,
}

/// Post-processing applied after the last resampling step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enhancement {
    /// Leave the resampled image as is.
    None,
    /// Blend with a sharpened copy.
    Sharpen,
    /// Blend with the edge map of the image.
    EdgeOverlay,
}

/// An ordered list of resampling steps and the final enhancement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizePlan {
    /// Steps in execution order; the last one always produces the target size.
    pub steps: Vec<ResampleStep>,
    /// Enhancement applied to the output of the last step.
    pub enhancement: Enhancement,
}

impl ResizePlan {
    fn single(size: ImageSize, mode: InterpolationMode, enhancement: Enhancement) -> Self {
        Self {
            steps: vec![ResampleStep { size, mode }],
            enhancement,
        }
    }

    /// Number of intermediate steps before the final pass.
    pub fn intermediate_steps(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Size produced by the plan.
    pub fn output_size(&self) -> Option<ImageSize> {
        self.steps.last().map(|step| step.size)
    }
}

fn axis_ratios(from: ImageSize, to: ImageSize) -> (f64, f64) {
    (
        to.width as f64 / from.width as f64,
        to.height as f64 / from.height as f64,
    )
}

/// Plan a detail-preserving downscale from `src` to `dst`.
///
/// Targets larger than the source on either axis are planned as an upscale.
/// When both axes shrink by less than `1 - near_identity_ratio` a single bilinear
/// pass is used. Otherwise the image is halved with area averaging until the
/// remaining ratio is above `halving_ratio`, and a final area pass reaches the
/// target. The result is always sharpened.
///
/// PRECONDITION: both sizes are non-empty.
pub fn downscale_plan(src: ImageSize, dst: ImageSize, config: &ResizeConfig) -> ResizePlan {
    if dst.width > src.width || dst.height > src.height {
        return upscale_plan(src, dst, config);
    }

    let (scale_w, scale_h) = axis_ratios(src, dst);
    if scale_w > config.near_identity_ratio && scale_h > config.near_identity_ratio {
        return ResizePlan::single(dst, InterpolationMode::Bilinear, Enhancement::Sharpen);
    }

    let mut steps = Vec::new();
    let mut current = src;

    loop {
        let (ratio_w, ratio_h) = axis_ratios(current, dst);
        if ratio_w.min(ratio_h) > config.halving_ratio {
            steps.push(ResampleStep {
                size: dst,
                mode: InterpolationMode::Area,
            });
            break;
        }

        // the shrinking axis is at least twice the target, the other one floors at 1
        current = ImageSize {
            width: (current.width / 2).max(1),
            height: (current.height / 2).max(1),
        };
        steps.push(ResampleStep {
            size: current,
            mode: InterpolationMode::Area,
        });
    }

    ResizePlan {
        steps,
        enhancement: Enhancement::Sharpen,
    }
}

/// Plan a detail-preserving upscale from `src` to `dst`.
///
/// When both axes grow by less than `direct_upscale_limit` a single Lanczos pass
/// is used without enhancement. Otherwise the image is doubled (capped at the
/// target per axis) with bicubic interpolation until an axis reaches
/// `final_pass_fraction` of its target, a final Lanczos pass reaches the target
/// and the edge overlay is applied.
///
/// PRECONDITION: both sizes are non-empty.
pub fn upscale_plan(src: ImageSize, dst: ImageSize, config: &ResizeConfig) -> ResizePlan {
    let (scale_w, scale_h) = axis_ratios(src, dst);
    if scale_w < config.direct_upscale_limit && scale_h < config.direct_upscale_limit {
        return ResizePlan::single(dst, InterpolationMode::Lanczos, Enhancement::None);
    }

    let mut steps = Vec::new();
    let mut current = src;

    loop {
        let reached_w = current.width as f64 >= dst.width as f64 * config.final_pass_fraction;
        let reached_h = current.height as f64 >= dst.height as f64 * config.final_pass_fraction;
        if reached_w || reached_h {
            steps.push(ResampleStep {
                size: dst,
                mode: InterpolationMode::Lanczos,
            });
            break;
        }

        current = ImageSize {
            width: (current.width * 2).min(dst.width),
            height: (current.height * 2).min(dst.height),
        };
        steps.push(ResampleStep {
            size: current,
            mode: InterpolationMode::Bicubic,
        });
    }

    ResizePlan {
        steps,
        enhancement: Enhancement::EdgeOverlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(plan: &ResizePlan) -> Vec<ImageSize> {
        plan.steps.iter().map(|step| step.size).collect()
    }

    #[test]
    fn downscale_near_identity_is_single_bilinear() {
        let config = ResizeConfig::default();
        let plan = downscale_plan([1000, 1000].into(), [960, 970].into(), &config);
        assert_eq!(
            plan.steps,
            vec![ResampleStep {
                size: [960, 970].into(),
                mode: InterpolationMode::Bilinear,
            }]
        );
        assert_eq!(plan.enhancement, Enhancement::Sharpen);
    }

    #[test]
    fn downscale_halves_until_ratio_above_half() {
        let config = ResizeConfig::default();
        let plan = downscale_plan([2000, 1500].into(), [400, 300].into(), &config);
        assert_eq!(
            sizes(&plan),
            vec![
                [1000, 750].into(),
                [500, 375].into(),
                [400, 300].into()
            ]
        );
        assert!(plan
            .steps
            .iter()
            .all(|step| step.mode == InterpolationMode::Area));
        assert_eq!(plan.intermediate_steps(), 2);
        assert_eq!(plan.output_size(), Some([400, 300].into()));
    }

    #[test]
    fn downscale_moderate_ratio_is_single_area_pass() {
        let config = ResizeConfig::default();
        let plan = downscale_plan([100, 100].into(), [60, 60].into(), &config);
        assert_eq!(
            plan.steps,
            vec![ResampleStep {
                size: [60, 60].into(),
                mode: InterpolationMode::Area,
            }]
        );
    }

    #[test]
    fn downscale_exact_half_still_halves() {
        let config = ResizeConfig::default();
        // a ratio of exactly 0.5 is not above the threshold
        let plan = downscale_plan([100, 100].into(), [50, 50].into(), &config);
        assert_eq!(sizes(&plan), vec![[50, 50].into(), [50, 50].into()]);
    }

    #[test]
    fn downscale_halving_count_is_log_bounded() {
        let config = ResizeConfig::default();
        for (src, dst) in [(4096usize, 3usize), (1000, 7), (513, 256), (64, 1), (999, 998)] {
            let plan = downscale_plan([src, src].into(), [dst, dst].into(), &config);
            let bound = (src as f64 / dst as f64).log2().ceil() as usize;
            assert!(
                plan.intermediate_steps() <= bound,
                "{src} -> {dst}: {} halvings, bound {bound}",
                plan.intermediate_steps()
            );
            // planning is deterministic
            assert_eq!(plan, downscale_plan([src, src].into(), [dst, dst].into(), &config));
        }
    }

    #[test]
    fn downscale_thin_image_never_reaches_zero() {
        let config = ResizeConfig::default();
        let plan = downscale_plan([100, 1].into(), [10, 1].into(), &config);
        assert!(plan
            .steps
            .iter()
            .all(|step| step.size.width >= 1 && step.size.height >= 1));
        assert_eq!(plan.output_size(), Some([10, 1].into()));
    }

    #[test]
    fn downscale_with_growing_axis_plans_upscale() {
        let config = ResizeConfig::default();
        let plan = downscale_plan([100, 100].into(), [50, 400].into(), &config);
        assert_eq!(plan, upscale_plan([100, 100].into(), [50, 400].into(), &config));
        assert_eq!(plan.enhancement, Enhancement::EdgeOverlay);
    }

    #[test]
    fn upscale_small_factor_is_single_lanczos() {
        let config = ResizeConfig::default();
        let plan = upscale_plan([100, 100].into(), [199, 150].into(), &config);
        assert_eq!(
            plan.steps,
            vec![ResampleStep {
                size: [199, 150].into(),
                mode: InterpolationMode::Lanczos,
            }]
        );
        assert_eq!(plan.enhancement, Enhancement::None);
    }

    #[test]
    fn upscale_doubles_then_lanczos() {
        let config = ResizeConfig::default();
        let plan = upscale_plan([400, 300].into(), [1200, 900].into(), &config);
        assert_eq!(
            plan.steps,
            vec![
                ResampleStep {
                    size: [800, 600].into(),
                    mode: InterpolationMode::Bicubic,
                },
                // 800 is still below 80% of 1200, so the capped doubling lands on the target
                ResampleStep {
                    size: [1200, 900].into(),
                    mode: InterpolationMode::Bicubic,
                },
                ResampleStep {
                    size: [1200, 900].into(),
                    mode: InterpolationMode::Lanczos,
                },
            ]
        );
        assert_eq!(plan.enhancement, Enhancement::EdgeOverlay);
    }

    #[test]
    fn upscale_doubling_is_capped_at_target() {
        let config = ResizeConfig::default();
        let plan = upscale_plan([10, 10].into(), [100, 15].into(), &config);
        assert_eq!(sizes(&plan), vec![[20, 15].into(), [100, 15].into()]);
    }

    #[test]
    fn upscale_large_factor() {
        let config = ResizeConfig::default();
        let plan = upscale_plan([10, 10].into(), [1000, 1000].into(), &config);
        assert_eq!(plan.steps.last().map(|s| s.mode), Some(InterpolationMode::Lanczos));
        assert_eq!(
            sizes(&plan),
            vec![
                [20, 20].into(),
                [40, 40].into(),
                [80, 80].into(),
                [160, 160].into(),
                [320, 320].into(),
                [640, 640].into(),
                [1000, 1000].into(),
                [1000, 1000].into()
            ]
        );
    }
}
