use crate::kernels::KernelPair;
use crate::GrayscaleImage;

/// Returns absolute values of horizontal and vertical gradients
/// of the interior pixel `(x, y)`.
///
/// Every pixel of the 3x3 neighbourhood is read by [GrayscaleImage::pixel()],
/// so any image layout is handled, including padded rows.
///
/// # Panics
/// If the neighbourhood of `(x, y)` is outside of the image buffer.
#[inline(always)]
pub fn gradient(image: &GrayscaleImage, x: u32, y: u32, kernels: &KernelPair) -> (u32, u32) {
    let mut gx = 0i32;
    let mut gy = 0i32;
    let left = x - 1;
    let top = y - 1;
    for (i, (kx_row, ky_row)) in kernels.x.iter().zip(&kernels.y).enumerate() {
        let cur_y = top + i as u32;
        for (j, (&kx, &ky)) in kx_row.iter().zip(ky_row).enumerate() {
            let pixel = image.pixel(left + j as u32, cur_y) as i32;
            gx += kx * pixel;
            gy += ky * pixel;
        }
    }
    (gx.unsigned_abs(), gy.unsigned_abs())
}

/// Unchecked version of [gradient()].
///
/// Pixels are read by offsets from the top-left corner of the neighbourhood
/// and multiplied by the flattened row-major weights of the kernels.
///
/// # Safety
/// The caller must guarantee that `1 <= x < image.width() - 1`
/// and `1 <= y < image.height() - 1`. Behavior is undefined otherwise.
#[inline(always)]
pub unsafe fn gradient_unchecked(
    image: &GrayscaleImage,
    x: u32,
    y: u32,
    kernels: &KernelPair,
) -> (u32, u32) {
    let stride = image.stride();
    let buffer = image.buffer();
    let kx = kernels.flat_x();
    let ky = kernels.flat_y();

    let mut gx = 0i32;
    let mut gy = 0i32;
    let mut offset = image.pixel_offset(x - 1, y - 1);
    let mut index = 0;
    for _ in 0..3 {
        for col in 0..3 {
            let pixel = *buffer.get_unchecked(offset + col) as i32;
            gx += kx[index] * pixel;
            gy += ky[index] * pixel;
            index += 1;
        }
        offset += stride;
    }
    (gx.unsigned_abs(), gy.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::{LAPLACIAN, SCHARR, SOBEL};

    fn vertical_step() -> GrayscaleImage {
        GrayscaleImage::from_vec(3, 3, vec![0, 0, 0, 0, 0, 0, 255, 255, 255]).unwrap()
    }

    #[test]
    fn sobel_vertical_step() {
        let image = vertical_step();
        assert_eq!(gradient(&image, 1, 1, &SOBEL), (0, 1020));
        assert_eq!(unsafe { gradient_unchecked(&image, 1, 1, &SOBEL) }, (0, 1020));
    }

    #[test]
    fn scharr_vertical_step() {
        let image = vertical_step();
        assert_eq!(gradient(&image, 1, 1, &SCHARR), (0, 16 * 255));
    }

    #[test]
    fn laplacian_single_bright_pixel() {
        let image = GrayscaleImage::from_vec(3, 3, vec![0, 0, 0, 0, 10, 0, 0, 0, 0]).unwrap();
        assert_eq!(gradient(&image, 1, 1, &LAPLACIAN), (80, 80));
    }

    #[test]
    fn padded_stride() {
        let buffer = vec![
            0, 0, 0, 0, 9, 9, //
            0, 0, 0, 0, 9, 9, //
            255, 255, 255, 255, 9, 9, //
        ];
        let image = GrayscaleImage::from_vec_with_stride(4, 3, 6, buffer).unwrap();
        for x in 1..3 {
            assert_eq!(gradient(&image, x, 1, &SOBEL), (0, 1020));
            assert_eq!(unsafe { gradient_unchecked(&image, x, 1, &SOBEL) }, (0, 1020));
        }
    }
}
