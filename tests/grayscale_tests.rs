use image::{DynamicImage, GrayImage, Rgb, RgbImage, Rgba, RgbaImage};

use fast_sobel::{
    filter, filter_gray_fast, filter_math, filter_simd, to_grayscale, FilterVariant,
    GrayscaleImage, ImageBufferError, ImageRef, IntoGrayscale, PixelType,
};
use testing::noise_image;


#[test]
fn luma_of_color_pixels() {
    let rgb = [255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
    let image = ImageRef::new(4, 1, &rgb, PixelType::U8x3).unwrap();
    assert_eq!(to_grayscale(&image).buffer(), &[76, 150, 29, 255]);
}

#[test]
fn alpha_premultiplies_components() {
    let rgba = [255, 255, 255, 255, 255, 255, 255, 0, 200, 200, 200, 255];
    let image = ImageRef::new(3, 1, &rgba, PixelType::U8x4).unwrap();
    assert_eq!(to_grayscale(&image).buffer(), &[255, 0, 200]);

    let luma_alpha = [200, 255, 200, 0];
    let image = ImageRef::new(2, 1, &luma_alpha, PixelType::U8x2).unwrap();
    assert_eq!(to_grayscale(&image).buffer(), &[200, 0]);
}

#[test]
fn gray_source_is_copied() {
    let image = noise_image(13, 7, 9);
    let image_ref = ImageRef::new(13, 7, image.buffer(), PixelType::U8).unwrap();
    assert_eq!(to_grayscale(&image_ref), image);
}

#[test]
fn padded_rows() {
    let buffer = [10, 20, 30, 99, 99, 40, 50, 60, 99, 99];
    let image = ImageRef::with_stride(1, 2, 5, &buffer, PixelType::U8x3).unwrap();
    let gray = to_grayscale(&image);
    assert_eq!(gray.stride(), 1);
    assert_eq!(gray.buffer().len(), 2);

    assert_eq!(
        ImageRef::with_stride(2, 2, 5, &buffer, PixelType::U8x3).unwrap_err(),
        ImageBufferError::InvalidStride
    );
    assert_eq!(
        ImageRef::new(4, 1, &buffer, PixelType::U8x3).unwrap_err(),
        ImageBufferError::InvalidBufferSize
    );
}

#[test]
fn empty_source() {
    let image = ImageRef::new(0, 10, &[], PixelType::U8x4).unwrap();
    assert!(to_grayscale(&image).is_empty());
    assert!(filter(&image, FilterVariant::Sobel).is_empty());
    assert!(filter_math(&image).is_empty());
    assert!(filter_simd(&image).unwrap().is_empty());
}

#[test]
fn color_wrappers_filter_grayscale_image() {
    let rgb: Vec<u8> = noise_image(30, 20, 4)
        .buffer()
        .iter()
        .flat_map(|&v| [v, v / 2, 255 - v])
        .collect();
    let image = ImageRef::new(30, 20, &rgb, PixelType::U8x3).unwrap();
    let gray = to_grayscale(&image);
    assert_eq!(
        filter(&image, FilterVariant::Laplacian),
        filter_gray_fast(&gray, FilterVariant::Laplacian)
    );
    assert_eq!(filter_math(&image).width(), 28);
    assert_eq!(filter_simd(&image).unwrap().width(), 30);
}

#[test]
fn dynamic_images() {
    let rgb = RgbImage::from_fn(6, 4, |x, y| Rgb([(x * 40) as u8, (y * 60) as u8, 17]));
    let expected = ImageRef::new(6, 4, rgb.as_raw(), PixelType::U8x3)
        .unwrap()
        .to_grayscale();
    assert_eq!(DynamicImage::ImageRgb8(rgb.clone()).to_grayscale(), expected);

    let rgba = RgbaImage::from_fn(6, 4, |x, y| Rgba([(x * 40) as u8, (y * 60) as u8, 17, 255]));
    assert_eq!(DynamicImage::ImageRgba8(rgba).to_grayscale(), expected);

    let rgb16 = DynamicImage::ImageRgb8(rgb).into_rgb16();
    assert_eq!(DynamicImage::ImageRgb16(rgb16).to_grayscale(), expected);
}

#[test]
fn gray_image_round_trip() {
    let image = noise_image(11, 5, 21);
    let gray_image = GrayImage::try_from(image.clone()).unwrap();
    assert_eq!((gray_image.width(), gray_image.height()), (11, 5));
    assert_eq!(gray_image.to_grayscale(), image);

    let dynamic = DynamicImage::from(GrayscaleImage::empty());
    assert_eq!((dynamic.width(), dynamic.height()), (0, 0));
}
