use fast_sobel as fs;

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum FilterVariant {
    /// Sobel operator
    Sobel,
    /// Sobel operator with unchecked reading of pixels
    SobelFast,
    /// Laplace operator, the same kernel for both directions
    Laplacian,
    /// Scharr operator, more accurate on diagonal edges than Sobel
    Scharr,
    /// Sharpen kernel, the same kernel for both directions
    Sharpen,
}

impl From<FilterVariant> for fs::FilterVariant {
    fn from(variant: FilterVariant) -> Self {
        match variant {
            FilterVariant::Sobel => fs::FilterVariant::Sobel,
            FilterVariant::SobelFast => fs::FilterVariant::SobelFast,
            FilterVariant::Laplacian => fs::FilterVariant::Laplacian,
            FilterVariant::Scharr => fs::FilterVariant::Scharr,
            FilterVariant::Sharpen => fs::FilterVariant::Sharpen,
        }
    }
}

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum Method {
    /// Integer convolution with bounds checking. The result is smaller
    /// than the source image by 2 pixels in each dimension.
    Checked,
    /// Integer convolution without bounds checking. The result is smaller
    /// than the source image by 2 pixels in each dimension.
    Fast,
    /// Floating-point Sobel operator.
    Math,
    /// Sobel operator with vectorized gradients. The result has the same
    /// size as the source image.
    Simd,
}

impl From<Method> for fs::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Checked => fs::Method::Checked,
            Method::Fast => fs::Method::Fast,
            Method::Math => fs::Method::Math,
            Method::Simd => fs::Method::Simd,
        }
    }
}
