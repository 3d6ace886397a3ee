use crate::kernels::{kernel_pair_for, FilterVariant, KernelPair};
use crate::magnitude::{
    BisectHalfSqrt, BisectSqrt, FloatSqrt, MagnitudeEstimator, MagnitudeStrategy, NewtonSqrt,
};
use crate::GrayscaleImage;

pub use math::filter_gray_math;
pub use native::{gradient, gradient_unchecked};

mod math;
mod native;

/// Method of reading the 3x3 neighbourhood of a pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ConvolutionStrategy {
    /// Every pixel is read through bounds-checked accessor.
    #[default]
    Checked,
    /// Pixels are read by precomputed offsets without bounds checking.
    Unchecked,
}

/// Reads gradient components of one pixel.
pub(crate) trait GradientSampler {
    /// # Safety
    /// `1 <= x < image.width() - 1` and `1 <= y < image.height() - 1`
    unsafe fn sample(image: &GrayscaleImage, x: u32, y: u32, kernels: &KernelPair) -> (u32, u32);
}

pub(crate) struct CheckedSampler;

pub(crate) struct UncheckedSampler;

impl GradientSampler for CheckedSampler {
    #[inline(always)]
    unsafe fn sample(image: &GrayscaleImage, x: u32, y: u32, kernels: &KernelPair) -> (u32, u32) {
        gradient(image, x, y, kernels)
    }
}

impl GradientSampler for UncheckedSampler {
    #[inline(always)]
    unsafe fn sample(image: &GrayscaleImage, x: u32, y: u32, kernels: &KernelPair) -> (u32, u32) {
        gradient_unchecked(image, x, y, kernels)
    }
}

/// Filters image with bounds-checked convolution and
/// Newton's integer square root.
///
/// The result is 2 pixels narrower and 2 pixels lower than the source image,
/// because the 3x3 window doesn't fit on border pixels.
/// Images smaller than 3x3 give an empty image.
pub fn filter_gray(
    image: &GrayscaleImage,
    variant: impl Into<Option<FilterVariant>>,
) -> GrayscaleImage {
    filter_gray_with(
        image,
        variant,
        ConvolutionStrategy::Checked,
        MagnitudeStrategy::Newton,
    )
}

/// Filters image with unchecked convolution and binary-search integer
/// square root. Gives the same result as [filter_gray].
pub fn filter_gray_fast(
    image: &GrayscaleImage,
    variant: impl Into<Option<FilterVariant>>,
) -> GrayscaleImage {
    filter_gray_with(
        image,
        variant,
        ConvolutionStrategy::Unchecked,
        MagnitudeStrategy::Bisect,
    )
}

/// Filters image with the given combination of strategies.
///
/// [FilterVariant::SobelFast] always uses unchecked convolution.
/// `None` in place of variant gives zero gradients for all pixels.
pub fn filter_gray_with(
    image: &GrayscaleImage,
    variant: impl Into<Option<FilterVariant>>,
    convolution: ConvolutionStrategy,
    magnitude: MagnitudeStrategy,
) -> GrayscaleImage {
    let variant = variant.into();
    let convolution = match variant {
        Some(v) if v.forces_unchecked() => ConvolutionStrategy::Unchecked,
        _ => convolution,
    };
    let kernels = kernel_pair_for(variant);
    match convolution {
        ConvolutionStrategy::Checked => {
            with_magnitude::<CheckedSampler>(image, kernels, magnitude)
        }
        ConvolutionStrategy::Unchecked => {
            with_magnitude::<UncheckedSampler>(image, kernels, magnitude)
        }
    }
}

fn with_magnitude<S: GradientSampler>(
    image: &GrayscaleImage,
    kernels: Option<&KernelPair>,
    magnitude: MagnitudeStrategy,
) -> GrayscaleImage {
    match magnitude {
        MagnitudeStrategy::Newton => filter_kernels::<S, NewtonSqrt>(image, kernels),
        MagnitudeStrategy::Bisect => filter_kernels::<S, BisectSqrt>(image, kernels),
        MagnitudeStrategy::BisectHalf => filter_kernels::<S, BisectHalfSqrt>(image, kernels),
        MagnitudeStrategy::Float => filter_kernels::<S, FloatSqrt>(image, kernels),
    }
}

fn filter_kernels<S: GradientSampler, M: MagnitudeEstimator>(
    image: &GrayscaleImage,
    kernels: Option<&KernelPair>,
) -> GrayscaleImage {
    match kernels {
        Some(kernels) => filter_interior(image, |x, y| {
            // SAFETY: filter_interior() calls the closure for interior pixels only.
            let (gx, gy) = unsafe { S::sample(image, x, y, kernels) };
            M::magnitude(gx, gy)
        }),
        // Zero gradients give zero magnitude for every strategy.
        None => filter_interior(image, |_, _| 0),
    }
}

/// Creates an image with size `(width - 2) x (height - 2)` and fills it
/// by values of `pixel_fn(x, y)` called for every interior pixel of the
/// source image. The value for `(x, y)` is stored at `(x - 1, y - 1)`.
pub(crate) fn filter_interior<F>(image: &GrayscaleImage, pixel_fn: F) -> GrayscaleImage
where
    F: Fn(u32, u32) -> u8 + Sync,
{
    let width = image.width();
    let height = image.height();
    if width < 3 || height < 3 {
        return GrayscaleImage::empty();
    }
    let mut dst = GrayscaleImage::new(width - 2, height - 2);

    let fill_row = |dst_y: u32, dst_row: &mut [u8]| {
        let y = dst_y + 1;
        for (dst_x, dst_pixel) in dst_row.iter_mut().enumerate() {
            *dst_pixel = pixel_fn(dst_x as u32 + 1, y);
        }
    };

    #[cfg(feature = "rayon")]
    {
        if crate::threading::for_each_row_par(&mut dst, &fill_row) {
            return dst;
        }
    }

    for (dst_y, dst_row) in dst.rows_mut().enumerate() {
        fill_row(dst_y as u32, dst_row);
    }
    dst
}
