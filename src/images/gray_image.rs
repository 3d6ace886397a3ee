use crate::ImageBufferError;

/// Owned single-channel 8-bit image.
///
/// Pixels are stored row by row, `stride` bytes per row. The pixel `(x, y)`
/// lives at offset `y * stride + x`. Bytes between `width` and `stride`
/// in every row are padding and never read by filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrayscaleImage {
    width: u32,
    height: u32,
    stride: usize,
    buffer: Vec<u8>,
}

impl GrayscaleImage {
    /// Create a black image with given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        let stride = width as usize;
        Self {
            width,
            height,
            stride,
            buffer: vec![0; stride * height as usize],
        }
    }

    /// Image with zero width and height.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_vec(width: u32, height: u32, buffer: Vec<u8>) -> Result<Self, ImageBufferError> {
        Self::from_vec_with_stride(width, height, width as usize, buffer)
    }

    pub fn from_vec_with_stride(
        width: u32,
        height: u32,
        stride: usize,
        buffer: Vec<u8>,
    ) -> Result<Self, ImageBufferError> {
        if stride < width as usize {
            return Err(ImageBufferError::InvalidStride);
        }
        if buffer.len() < stride * height as usize {
            return Err(ImageBufferError::InvalidBufferSize);
        }
        Ok(Self {
            width,
            height,
            stride,
            buffer,
        })
    }

    /// Create an image by calling `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u8) -> Self {
        let mut image = Self::new(width, height);
        for (y, row) in image.rows_mut().enumerate() {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = f(x as u32, y as u32);
            }
        }
        image
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size of one row in bytes.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns `true` if the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Buffer with image pixels data, including row padding.
    #[inline]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[inline]
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.buffer
    }

    #[inline(always)]
    pub fn pixel_offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride + x as usize
    }

    /// Returns value of the pixel.
    ///
    /// # Panics
    /// If `(x, y)` is outside of the image buffer.
    #[inline(always)]
    pub fn pixel(&self, x: u32, y: u32) -> u8 {
        self.buffer[self.pixel_offset(x, y)]
    }

    #[inline(always)]
    pub fn set_pixel(&mut self, x: u32, y: u32, value: u8) {
        let offset = self.pixel_offset(x, y);
        self.buffer[offset] = value;
    }

    /// Iterator over rows of the image without padding bytes.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        let width = self.width as usize;
        let stride = self.stride.max(1);
        self.buffer
            .chunks(stride)
            .take(self.height as usize)
            .map(move |row| &row[..width])
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        let width = self.width as usize;
        let stride = self.stride.max(1);
        self.buffer
            .chunks_mut(stride)
            .take(self.height as usize)
            .map(move |row| &mut row[..width])
    }

    /// Copy of the image with row stride equal to width.
    pub fn to_packed(&self) -> Self {
        if self.stride == self.width as usize {
            return self.clone();
        }
        let mut buffer = Vec::with_capacity(self.width as usize * self.height as usize);
        self.rows().for_each(|row| buffer.extend_from_slice(row));
        Self {
            width: self.width,
            height: self.height,
            stride: self.width as usize,
            buffer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_smaller_than_width() {
        let res = GrayscaleImage::from_vec_with_stride(4, 2, 3, vec![0; 8]);
        assert_eq!(res, Err(ImageBufferError::InvalidStride));
    }

    #[test]
    fn buffer_too_small() {
        let res = GrayscaleImage::from_vec_with_stride(4, 2, 6, vec![0; 11]);
        assert_eq!(res, Err(ImageBufferError::InvalidBufferSize));
    }

    #[test]
    fn rows_skip_padding() {
        let buffer = vec![1, 2, 3, 0, 0, 4, 5, 6, 0, 0];
        let image = GrayscaleImage::from_vec_with_stride(3, 2, 5, buffer).unwrap();
        let rows: Vec<&[u8]> = image.rows().collect();
        assert_eq!(rows, vec![&[1, 2, 3][..], &[4, 5, 6][..]]);
        assert_eq!(image.pixel(2, 1), 6);
        assert_eq!(image.to_packed().buffer(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn empty_image_has_no_rows() {
        let image = GrayscaleImage::empty();
        assert!(image.is_empty());
        assert_eq!(image.rows().count(), 0);
    }
}
