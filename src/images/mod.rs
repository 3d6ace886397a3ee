//! Contains types of images consumed and produced by filters.
pub use gray_image::*;
pub use image_ref::*;

mod gray_image;
mod image_ref;

#[cfg(feature = "image")]
mod image_crate;
