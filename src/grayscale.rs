use crate::{GrayscaleImage, ImageRef, PixelType};

/// Images that can be reduced into single-channel intensity data.
pub trait IntoGrayscale {
    /// Returns a new tightly packed grayscale image.
    ///
    /// An image with zero width or height gives an empty image.
    fn to_grayscale(&self) -> GrayscaleImage;
}

/// Reduces an image of any supported pixel type into an 8-bit grayscale image.
pub fn to_grayscale(image: &impl IntoGrayscale) -> GrayscaleImage {
    image.to_grayscale()
}

impl IntoGrayscale for GrayscaleImage {
    fn to_grayscale(&self) -> GrayscaleImage {
        if self.is_empty() {
            return GrayscaleImage::empty();
        }
        self.to_packed()
    }
}

impl IntoGrayscale for ImageRef<'_> {
    fn to_grayscale(&self) -> GrayscaleImage {
        let width = self.width();
        let height = self.height();
        if width == 0 || height == 0 {
            return GrayscaleImage::empty();
        }
        let mut dst = GrayscaleImage::new(width, height);
        let src_rows = self.rows();
        let dst_rows = dst.rows_mut();
        match self.pixel_type() {
            PixelType::U8 => {
                for (src_row, dst_row) in src_rows.zip(dst_rows) {
                    dst_row.copy_from_slice(src_row);
                }
            }
            PixelType::U8x2 => {
                for (src_row, dst_row) in src_rows.zip(dst_rows) {
                    for (src, dst) in src_row.chunks_exact(2).zip(dst_row.iter_mut()) {
                        let l = expand(src[0], src[1]);
                        *dst = luma(l, l, l);
                    }
                }
            }
            PixelType::U8x3 => {
                for (src_row, dst_row) in src_rows.zip(dst_rows) {
                    for (src, dst) in src_row.chunks_exact(3).zip(dst_row.iter_mut()) {
                        *dst = luma(
                            expand(src[0], 255),
                            expand(src[1], 255),
                            expand(src[2], 255),
                        );
                    }
                }
            }
            PixelType::U8x4 => {
                for (src_row, dst_row) in src_rows.zip(dst_rows) {
                    for (src, dst) in src_row.chunks_exact(4).zip(dst_row.iter_mut()) {
                        let alpha = src[3];
                        *dst = luma(
                            expand(src[0], alpha),
                            expand(src[1], alpha),
                            expand(src[2], alpha),
                        );
                    }
                }
            }
        }
        dst
    }
}

/// Converts 8-bit component into 16-bit one premultiplied by alpha.
#[inline(always)]
fn expand(component: u8, alpha: u8) -> u32 {
    (component as u32 * 0x101) * alpha as u32 / 0xff
}

/// BT.601 luma of 16-bit components with weights in 16.16 fixed point.
/// Sum of weights is equal to `1 << 16`, so the result can't overflow.
#[inline(always)]
fn luma(r: u32, g: u32, b: u32) -> u8 {
    ((19595 * r + 38470 * g + 7471 * b + (1 << 15)) >> 24) as u8
}
