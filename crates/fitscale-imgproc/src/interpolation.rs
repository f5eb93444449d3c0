use fast_image_resize as fr;

/// Interpolation mode for the resize operation
///
/// Ordered roughly from cheapest to most expensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterpolationMode {
    /// Nearest neighbor interpolation
    Nearest,
    /// Bilinear interpolation
    Bilinear,
    /// Area averaging, each output pixel is the mean of the source pixels it covers.
    /// Anti-aliases when shrinking.
    Area,
    /// Bicubic (Catmull-Rom) interpolation
    Bicubic,
    /// Windowed-sinc interpolation with three lobes.
    /// Sharpest of the available modes but may ring near hard edges.
    Lanczos,
}

impl InterpolationMode {
    /// Map the interpolation mode to a [`fast_image_resize`] algorithm.
    pub fn resize_alg(self) -> fr::ResizeAlg {
        match self {
            InterpolationMode::Nearest => fr::ResizeAlg::Nearest,
            InterpolationMode::Bilinear => fr::ResizeAlg::Convolution(fr::FilterType::Bilinear),
            InterpolationMode::Area => fr::ResizeAlg::Convolution(fr::FilterType::Box),
            InterpolationMode::Bicubic => fr::ResizeAlg::Convolution(fr::FilterType::CatmullRom),
            InterpolationMode::Lanczos => fr::ResizeAlg::Convolution(fr::FilterType::Lanczos3),
        }
    }
}

impl std::fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            InterpolationMode::Nearest => "nearest",
            InterpolationMode::Bilinear => "bilinear",
            InterpolationMode::Area => "area",
            InterpolationMode::Bicubic => "bicubic",
            InterpolationMode::Lanczos => "lanczos",
        };
        f.write_str(name)
    }
}
