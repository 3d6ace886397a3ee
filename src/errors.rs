use thiserror::Error;

use crate::CpuExtensions;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageBufferError {
    #[error("Size of buffer is smaller than required")]
    InvalidBufferSize,
    #[error("Row stride is smaller than image width")]
    InvalidStride,
}

/// Violations of the calling contract of the Sobel gradient primitive.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GradientError {
    #[error("Size of source buffer is smaller than src_stride * height")]
    SourceBufferTooSmall,
    #[error("Stride of source image is smaller than its width")]
    InvalidSourceStride,
    #[error("Size of destination buffer is smaller than dst_stride * height")]
    DestinationBufferTooSmall,
    #[error("Stride of destination plane must be even and not less than 2 * width")]
    InvalidDestinationStride,
    #[error("Alignment of destination buffer don't match to alignment of u16")]
    InvalidDestinationAlignment,
    #[error("CPU extensions {0:?} are not supported by this CPU")]
    UnsupportedCpuExtensions(CpuExtensions),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FilterError {
    #[error("Failed to allocate buffer for gradient planes")]
    AllocationFailed,
    #[error(transparent)]
    Gradient(#[from] GradientError),
}
