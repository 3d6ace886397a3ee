/// Layout of pixels in a color source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PixelType {
    /// One byte of luma per pixel
    U8,
    /// Luma and alpha
    U8x2,
    /// RGB
    U8x3,
    /// RGBA
    U8x4,
}

impl PixelType {
    /// Size of one pixel in bytes.
    pub fn size(&self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U8x2 => 2,
            Self::U8x3 => 3,
            Self::U8x4 => 4,
        }
    }

    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::U8x2 | Self::U8x4)
    }
}
