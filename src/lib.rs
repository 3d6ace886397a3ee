#![doc = include_str!("../README.md")]
//!
//! ## Feature flags
#![doc = document_features::document_features!()]

pub use convolution::{
    filter_gray, filter_gray_fast, filter_gray_math, filter_gray_with, gradient,
    gradient_unchecked, ConvolutionStrategy,
};
pub use cpu_extensions::CpuExtensions;
pub use detector::{EdgeDetector, FilterOptions, Method};
pub use errors::*;
pub use grayscale::{to_grayscale, IntoGrayscale};
pub use images::*;
pub use kernels::{
    kernel_pair_for, FilterVariant, Kernel, KernelPair, UnknownFilterVariant, LAPLACIAN,
    SCHARR, SHARPEN, SOBEL,
};
pub use magnitude::{
    int_sqrt_bisect, int_sqrt_bisect_half, int_sqrt_newton, magnitude_f64, MagnitudeStrategy,
};
pub use pixels::PixelType;
pub use simd::{filter_gray_simd, filter_gray_simd_with, sobel_dx_abs, sobel_dy_abs, SimdBackend};

mod convolution;
mod cpu_extensions;
mod detector;
mod errors;
mod grayscale;
mod images;
pub mod kernels;
pub mod magnitude;
#[cfg(target_arch = "aarch64")]
mod neon_utils;
mod pixels;
mod simd;
#[cfg(target_arch = "x86_64")]
mod simd_utils;
#[cfg(feature = "rayon")]
mod threading;

/// Converts image into grayscale and filters it by [filter_gray_fast].
pub fn filter(
    image: &impl IntoGrayscale,
    variant: impl Into<Option<FilterVariant>>,
) -> GrayscaleImage {
    filter_gray_fast(&image.to_grayscale(), variant)
}

/// Converts image into grayscale and filters it by [filter_gray_math].
pub fn filter_math(image: &impl IntoGrayscale) -> GrayscaleImage {
    filter_gray_math(&image.to_grayscale())
}

/// Converts image into grayscale and filters it by [filter_gray_simd].
pub fn filter_simd(image: &impl IntoGrayscale) -> Result<GrayscaleImage, FilterError> {
    filter_gray_simd(&image.to_grayscale())
}
