use image::{DynamicImage, GrayImage, ImageBuffer};

use crate::{GrayscaleImage, ImageBufferError, ImageRef, IntoGrayscale, PixelType};

impl IntoGrayscale for DynamicImage {
    fn to_grayscale(&self) -> GrayscaleImage {
        let (width, height) = (self.width(), self.height());
        match self {
            DynamicImage::ImageLuma8(img) => img.to_grayscale(),
            DynamicImage::ImageLumaA8(img) => {
                raw_to_grayscale(width, height, img.as_raw(), PixelType::U8x2)
            }
            DynamicImage::ImageRgb8(img) => {
                raw_to_grayscale(width, height, img.as_raw(), PixelType::U8x3)
            }
            DynamicImage::ImageRgba8(img) => {
                raw_to_grayscale(width, height, img.as_raw(), PixelType::U8x4)
            }
            // Images with 16-bit or float components are reduced to 8-bit RGBA first.
            _ => {
                let rgba = self.to_rgba8();
                raw_to_grayscale(width, height, rgba.as_raw(), PixelType::U8x4)
            }
        }
    }
}

impl IntoGrayscale for GrayImage {
    fn to_grayscale(&self) -> GrayscaleImage {
        raw_to_grayscale(self.width(), self.height(), self.as_raw(), PixelType::U8)
    }
}

fn raw_to_grayscale(
    width: u32,
    height: u32,
    buffer: &[u8],
    pixel_type: PixelType,
) -> GrayscaleImage {
    ImageRef::new(width, height, buffer, pixel_type)
        .map(|image| image.to_grayscale())
        .unwrap_or_default()
}

impl TryFrom<GrayscaleImage> for GrayImage {
    type Error = ImageBufferError;

    fn try_from(image: GrayscaleImage) -> Result<Self, Self::Error> {
        let packed = image.to_packed();
        let (width, height) = (packed.width(), packed.height());
        ImageBuffer::from_raw(width, height, packed.into_vec())
            .ok_or(ImageBufferError::InvalidBufferSize)
    }
}

impl From<GrayscaleImage> for DynamicImage {
    fn from(image: GrayscaleImage) -> Self {
        match GrayImage::try_from(image) {
            Ok(gray) => DynamicImage::ImageLuma8(gray),
            Err(_) => DynamicImage::ImageLuma8(GrayImage::new(0, 0)),
        }
    }
}
