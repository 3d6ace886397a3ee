use super::filter_interior;
use crate::kernels::{SOBEL_X_F64, SOBEL_Y_F64};
use crate::magnitude::magnitude_f64;
use crate::GrayscaleImage;

/// Filters image by Sobel operator with computations in floating point.
///
/// Output has the same size as the output of [filter_gray](crate::filter_gray).
/// Pixel values are truncated, so they may be less by 1
/// than values rounded up by integer square root.
pub fn filter_gray_math(image: &GrayscaleImage) -> GrayscaleImage {
    filter_interior(image, |x, y| {
        // SAFETY: filter_interior() calls the closure for interior pixels only.
        let (gx, gy) = unsafe { sobel_gradient_f64(image, x, y) };
        magnitude_f64(gx, gy)
    })
}

/// # Safety
/// `1 <= x < image.width() - 1` and `1 <= y < image.height() - 1`
#[inline(always)]
unsafe fn sobel_gradient_f64(image: &GrayscaleImage, x: u32, y: u32) -> (f64, f64) {
    let stride = image.stride();
    let buffer = image.buffer();
    let mut gx = 0.;
    let mut gy = 0.;
    let mut offset = image.pixel_offset(x - 1, y - 1);
    let mut index = 0;
    for _ in 0..3 {
        for col in 0..3 {
            let pixel = *buffer.get_unchecked(offset + col) as f64;
            gx += SOBEL_X_F64[index] * pixel;
            gy += SOBEL_Y_F64[index] * pixel;
            index += 1;
        }
        offset += stride;
    }
    (gx.abs(), gy.abs())
}
