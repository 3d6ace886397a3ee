use crate::{ImageBufferError, PixelType};

/// Simple reference to pixels data of a color or grayscale image.
#[derive(Debug, Copy, Clone)]
pub struct ImageRef<'a> {
    width: u32,
    height: u32,
    stride: usize,
    buffer: &'a [u8],
    pixel_type: PixelType,
}

impl<'a> ImageRef<'a> {
    /// Create an image from slice with tightly packed pixels-data.
    pub fn new(
        width: u32,
        height: u32,
        buffer: &'a [u8],
        pixel_type: PixelType,
    ) -> Result<Self, ImageBufferError> {
        let stride = width as usize * pixel_type.size();
        Self::with_stride(width, height, stride, buffer, pixel_type)
    }

    /// Create an image from slice with pixels-data.
    /// `stride` is the size of one row in bytes.
    pub fn with_stride(
        width: u32,
        height: u32,
        stride: usize,
        buffer: &'a [u8],
        pixel_type: PixelType,
    ) -> Result<Self, ImageBufferError> {
        if stride < width as usize * pixel_type.size() {
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
            pixel_type,
        })
    }

    #[inline]
    pub fn pixel_type(&self) -> PixelType {
        self.pixel_type
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Buffer with image pixels data.
    #[inline]
    pub fn buffer(&self) -> &[u8] {
        self.buffer
    }

    /// Iterator over rows of the image without padding bytes.
    pub fn rows(&self) -> impl Iterator<Item = &'a [u8]> {
        let row_size = self.width as usize * self.pixel_type.size();
        let stride = self.stride.max(1);
        self.buffer
            .chunks(stride)
            .take(self.height as usize)
            .map(move |row| &row[..row_size])
    }
}
