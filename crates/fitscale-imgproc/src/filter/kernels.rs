/// A 3x3 convolution kernel, indexed as `kernel[dy][dx]`.
pub type Kernel3x3 = [[f32; 3]; 3];

/// Create the classic sharpening kernel.
///
/// The center weight is 9 and the eight neighbours are -1, so the kernel sums to
/// one and flat regions are left untouched.
///
/// # Returns
///
/// The 3x3 kernel.
pub fn sharpen_kernel_3x3() -> Kernel3x3 {
    [[-1.0, -1.0, -1.0], [-1.0, 9.0, -1.0], [-1.0, -1.0, -1.0]]
}

/// Create the identity kernel.
pub fn identity_kernel_3x3() -> Kernel3x3 {
    [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]]
}
