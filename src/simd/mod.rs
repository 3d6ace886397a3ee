//! Sobel filter with gradients computed by vectorized routines.
//!
//! The gradient primitive writes absolute values of horizontal or vertical
//! Sobel derivatives into a plane of 16-bit samples. Its calling contract:
//!
//! - `src` holds `height` rows of `src_stride` bytes, `src_stride >= width`;
//! - `dst` holds `height` rows of `dst_stride` bytes, `dst_stride` is even
//!   and `dst_stride >= 2 * width`. With `dst_stride == 2 * src_stride`
//!   the destination is twice as large as the source;
//! - `dst` must be aligned as `u16`; samples are stored in native byte order.
//!
//! Border pixels are handled by replicating the nearest row or column,
//! so the plane has the same size as the source image.
use crate::magnitude::magnitude_f64;
use crate::{CpuExtensions, FilterError, GradientError, GrayscaleImage};

#[cfg(target_arch = "x86_64")]
mod avx2;
#[cfg(feature = "libsimd")]
mod ffi;
mod native;
#[cfg(target_arch = "aarch64")]
mod neon;
#[cfg(target_arch = "x86_64")]
mod sse4;

/// Implementation of the gradient primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimdBackend {
    /// Routines of this crate, vectorized with the given CPU extensions.
    Builtin(CpuExtensions),
    /// Routines of the native [Simd](https://github.com/ermig1979/Simd) library.
    #[cfg(feature = "libsimd")]
    LibSimd,
}

impl Default for SimdBackend {
    fn default() -> Self {
        Self::Builtin(CpuExtensions::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Derivative {
    Dx,
    Dy,
}

/// Computes one row of a gradient plane from three source rows:
/// the row above, the current one and the row below.
type RowFn = unsafe fn(rows: [&[u8]; 3], dst_row: &mut [u16]);

/// Writes absolute values of horizontal Sobel derivative into `dst`.
///
/// See the module documentation for the contract on buffers.
pub fn sobel_dx_abs(
    src: &[u8],
    src_stride: usize,
    width: usize,
    height: usize,
    dst: &mut [u8],
    dst_stride: usize,
    backend: SimdBackend,
) -> Result<(), GradientError> {
    sobel_abs(
        Derivative::Dx,
        src,
        src_stride,
        width,
        height,
        dst,
        dst_stride,
        backend,
    )
}

/// Writes absolute values of vertical Sobel derivative into `dst`.
///
/// See the module documentation for the contract on buffers.
pub fn sobel_dy_abs(
    src: &[u8],
    src_stride: usize,
    width: usize,
    height: usize,
    dst: &mut [u8],
    dst_stride: usize,
    backend: SimdBackend,
) -> Result<(), GradientError> {
    sobel_abs(
        Derivative::Dy,
        src,
        src_stride,
        width,
        height,
        dst,
        dst_stride,
        backend,
    )
}

#[allow(clippy::too_many_arguments)]
fn sobel_abs(
    derivative: Derivative,
    src: &[u8],
    src_stride: usize,
    width: usize,
    height: usize,
    dst: &mut [u8],
    dst_stride: usize,
    backend: SimdBackend,
) -> Result<(), GradientError> {
    if width == 0 || height == 0 {
        return Ok(());
    }
    if src_stride < width {
        return Err(GradientError::InvalidSourceStride);
    }
    if src.len() < src_stride * height {
        return Err(GradientError::SourceBufferTooSmall);
    }
    if dst_stride % 2 != 0 || dst_stride < 2 * width {
        return Err(GradientError::InvalidDestinationStride);
    }
    if dst.len() < dst_stride * height {
        return Err(GradientError::DestinationBufferTooSmall);
    }
    let dst = &mut dst[..dst_stride * height];

    match backend {
        SimdBackend::Builtin(cpu_extensions) => {
            if !cpu_extensions.is_supported() {
                return Err(GradientError::UnsupportedCpuExtensions(cpu_extensions));
            }
            let dst = bytemuck::try_cast_slice_mut::<u8, u16>(dst)
                .map_err(|_| GradientError::InvalidDestinationAlignment)?;
            let row_fn = select_row_fn(derivative, cpu_extensions);
            for_each_row(src, src_stride, width, height, dst, dst_stride / 2, |rows, dst_row| {
                // SAFETY: the CPU supports selected extensions
                // and all rows have length equal to `width`.
                unsafe { row_fn(rows, dst_row) }
            });
        }
        #[cfg(feature = "libsimd")]
        SimdBackend::LibSimd => {
            ffi::sobel_abs(derivative, src, src_stride, width, height, dst, dst_stride);
        }
    }
    Ok(())
}

fn select_row_fn(derivative: Derivative, cpu_extensions: CpuExtensions) -> RowFn {
    match (cpu_extensions, derivative) {
        #[cfg(target_arch = "x86_64")]
        (CpuExtensions::Avx2, Derivative::Dx) => avx2::dx_row,
        #[cfg(target_arch = "x86_64")]
        (CpuExtensions::Avx2, Derivative::Dy) => avx2::dy_row,
        #[cfg(target_arch = "x86_64")]
        (CpuExtensions::Sse4_1, Derivative::Dx) => sse4::dx_row,
        #[cfg(target_arch = "x86_64")]
        (CpuExtensions::Sse4_1, Derivative::Dy) => sse4::dy_row,
        #[cfg(target_arch = "aarch64")]
        (CpuExtensions::Neon, Derivative::Dx) => neon::dx_row,
        #[cfg(target_arch = "aarch64")]
        (CpuExtensions::Neon, Derivative::Dy) => neon::dy_row,
        (_, Derivative::Dx) => native::dx_row,
        (_, Derivative::Dy) => native::dy_row,
    }
}

/// Calls `row_fn` for every row of the destination plane.
/// Rows outside of the image are replaced by the nearest border row.
fn for_each_row<F>(
    src: &[u8],
    src_stride: usize,
    width: usize,
    height: usize,
    dst: &mut [u16],
    dst_stride: usize,
    mut row_fn: F,
) where
    F: FnMut([&[u8]; 3], &mut [u16]),
{
    let src_row = move |y: usize| {
        let start = y * src_stride;
        &src[start..start + width]
    };
    for (y, dst_row) in dst.chunks_exact_mut(dst_stride).take(height).enumerate() {
        let rows = [
            src_row(y.saturating_sub(1)),
            src_row(y),
            src_row((y + 1).min(height - 1)),
        ];
        row_fn(rows, &mut dst_row[..width]);
    }
}

/// Filters image by Sobel operator with gradients computed by the best
/// vectorized routines supported by the CPU.
///
/// Unlike [filter_gray](crate::filter_gray), the result has the same size
/// as the source image, border pixels are filtered with replicated
/// neighbours. Values are truncated square roots clipped by 255.
pub fn filter_gray_simd(image: &GrayscaleImage) -> Result<GrayscaleImage, FilterError> {
    filter_gray_simd_with(image, SimdBackend::default())
}

/// The same as [filter_gray_simd] but with the given implementation
/// of the gradient primitive.
pub fn filter_gray_simd_with(
    image: &GrayscaleImage,
    backend: SimdBackend,
) -> Result<GrayscaleImage, FilterError> {
    if image.is_empty() {
        return Ok(GrayscaleImage::empty());
    }
    let width = image.width() as usize;
    let height = image.height() as usize;
    let src_stride = image.stride();
    let dst_stride = src_stride * 2;

    // Planes are released on every exit path.
    let mut dx_plane = alloc_plane(src_stride * height)?;
    let mut dy_plane = alloc_plane(src_stride * height)?;
    sobel_dx_abs(
        image.buffer(),
        src_stride,
        width,
        height,
        bytemuck::cast_slice_mut(dx_plane.as_mut_slice()),
        dst_stride,
        backend,
    )?;
    sobel_dy_abs(
        image.buffer(),
        src_stride,
        width,
        height,
        bytemuck::cast_slice_mut(dy_plane.as_mut_slice()),
        dst_stride,
        backend,
    )?;

    let mut dst = GrayscaleImage::new(image.width(), image.height());
    let dx_rows = dx_plane.chunks_exact(src_stride);
    let dy_rows = dy_plane.chunks_exact(src_stride);
    for ((dst_row, dx_row), dy_row) in dst.rows_mut().zip(dx_rows).zip(dy_rows) {
        for ((dst_pixel, &dx), &dy) in dst_row.iter_mut().zip(dx_row).zip(dy_row) {
            *dst_pixel = magnitude_f64(dx as f64, dy as f64);
        }
    }
    Ok(dst)
}

fn alloc_plane(len: usize) -> Result<Vec<u16>, FilterError> {
    let mut plane = Vec::new();
    plane
        .try_reserve_exact(len)
        .map_err(|_| FilterError::AllocationFailed)?;
    plane.resize(len, 0);
    Ok(plane)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image(width: u32, height: u32) -> GrayscaleImage {
        GrayscaleImage::from_fn(width, height, |x, y| {
            ((x * 37 + y * 91 + (x * y) % 13 * 17) % 256) as u8
        })
    }

    fn plane(
        derivative: Derivative,
        image: &GrayscaleImage,
        backend: SimdBackend,
    ) -> Result<Vec<u16>, GradientError> {
        let stride = image.stride();
        let mut plane = vec![0u16; stride * image.height() as usize];
        sobel_abs(
            derivative,
            image.buffer(),
            stride,
            image.width() as usize,
            image.height() as usize,
            bytemuck::cast_slice_mut(plane.as_mut_slice()),
            stride * 2,
            backend,
        )?;
        Ok(plane)
    }

    #[test]
    fn builtin_backends_give_equal_planes() {
        for (width, height) in [(1, 1), (2, 5), (7, 3), (33, 9), (64, 64), (100, 17)] {
            let image = test_image(width, height);
            for derivative in [Derivative::Dx, Derivative::Dy] {
                let expected =
                    plane(derivative, &image, SimdBackend::Builtin(CpuExtensions::None)).unwrap();
                for &cpu_extensions in CpuExtensions::all() {
                    if !cpu_extensions.is_supported() {
                        continue;
                    }
                    let result =
                        plane(derivative, &image, SimdBackend::Builtin(cpu_extensions)).unwrap();
                    assert_eq!(
                        result, expected,
                        "{derivative:?} {cpu_extensions:?} {width}x{height}"
                    );
                }
            }
        }
    }

    #[test]
    fn replicated_borders() {
        // Horizontal ramp: every column is brighter than previous one by 10.
        let image = GrayscaleImage::from_fn(4, 2, |x, _| (x * 10) as u8);
        let dx = plane(Derivative::Dx, &image, SimdBackend::Builtin(CpuExtensions::None)).unwrap();
        assert_eq!(dx, vec![40, 80, 80, 40, 40, 80, 80, 40]);
        let dy = plane(Derivative::Dy, &image, SimdBackend::Builtin(CpuExtensions::None)).unwrap();
        assert!(dy.iter().all(|&v| v == 0));
    }

    #[test]
    fn contract_violations() {
        let src = [0u8; 12];
        let mut dst = [0u16; 13];
        let backend = SimdBackend::Builtin(CpuExtensions::None);
        let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut dst[..]);
        assert_eq!(
            sobel_dx_abs(&src, 3, 4, 3, dst_bytes, 8, backend),
            Err(GradientError::InvalidSourceStride)
        );
        assert_eq!(
            sobel_dx_abs(&src, 4, 4, 4, dst_bytes, 8, backend),
            Err(GradientError::SourceBufferTooSmall)
        );
        assert_eq!(
            sobel_dx_abs(&src, 4, 4, 3, dst_bytes, 7, backend),
            Err(GradientError::InvalidDestinationStride)
        );
        assert_eq!(
            sobel_dx_abs(&src, 4, 4, 3, &mut dst_bytes[..23], 8, backend),
            Err(GradientError::DestinationBufferTooSmall)
        );
        assert_eq!(
            sobel_dx_abs(&src, 4, 4, 3, &mut dst_bytes[1..], 8, backend),
            Err(GradientError::InvalidDestinationAlignment)
        );
        assert_eq!(sobel_dx_abs(&src, 4, 4, 3, dst_bytes, 8, backend), Ok(()));
    }
}
