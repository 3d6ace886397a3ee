use log::debug;

use crate::convolution::{filter_gray_math, filter_gray_with, ConvolutionStrategy};
use crate::grayscale::IntoGrayscale;
use crate::kernels::FilterVariant;
use crate::magnitude::MagnitudeStrategy;
use crate::simd::{filter_gray_simd_with, SimdBackend};
use crate::{CpuExtensions, FilterError, GrayscaleImage};

/// Implementation of the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Method {
    /// Bounds-checked integer convolution, Newton's square root.
    #[default]
    Checked,
    /// Unchecked integer convolution, binary-search square root.
    Fast,
    /// Sobel operator with floating-point convolution and square root.
    Math,
    /// Sobel operator with vectorized gradients. The result has
    /// the same size as the source image.
    Simd,
}

/// Options of [EdgeDetector::filter].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOptions {
    /// Kernels to filter with. `None` gives an all-zero image.
    /// [Method::Math] and [Method::Simd] always apply the Sobel operator.
    pub variant: Option<FilterVariant>,
    pub method: Method,
    /// Overrides the magnitude estimator of [Method::Checked]
    /// and [Method::Fast].
    pub magnitude: Option<MagnitudeStrategy>,
    /// Implementation of gradients for [Method::Simd].
    /// By default, builtin routines with CPU-extensions of the detector.
    pub simd_backend: Option<SimdBackend>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            variant: Some(FilterVariant::Sobel),
            method: Method::default(),
            magnitude: None,
            simd_backend: None,
        }
    }
}

impl FilterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: impl Into<Option<FilterVariant>>) -> Self {
        self.variant = variant.into();
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn magnitude(mut self, magnitude: MagnitudeStrategy) -> Self {
        self.magnitude = Some(magnitude);
        self
    }

    pub fn simd_backend(mut self, backend: SimdBackend) -> Self {
        self.simd_backend = Some(backend);
        self
    }
}

/// Methods of this structure used to detect edges in images.
#[derive(Default, Debug, Clone)]
pub struct EdgeDetector {
    cpu_extensions: CpuExtensions,
}

impl EdgeDetector {
    /// Creates instance of `EdgeDetector`
    ///
    /// By default, instance of `EdgeDetector` created with best CPU-extensions provided by your CPU.
    /// You can change this by use method [EdgeDetector::set_cpu_extensions].
    pub fn new() -> Self {
        let detector = Self::default();
        debug!("CPU extensions of edge detector: {:?}", detector.cpu_extensions);
        detector
    }

    /// Filters grayscale image with the given options.
    ///
    /// Only [Method::Simd] may fail, the other methods always return `Ok`.
    pub fn filter(
        &self,
        image: &GrayscaleImage,
        options: &FilterOptions,
    ) -> Result<GrayscaleImage, FilterError> {
        let convolution = match options.method {
            Method::Checked => ConvolutionStrategy::Checked,
            Method::Fast => ConvolutionStrategy::Unchecked,
            Method::Math => return Ok(filter_gray_math(image)),
            Method::Simd => {
                let backend = options
                    .simd_backend
                    .unwrap_or(SimdBackend::Builtin(self.cpu_extensions));
                debug!("Gradients are computed by {backend:?}");
                return filter_gray_simd_with(image, backend);
            }
        };
        let magnitude = options.magnitude.unwrap_or(match convolution {
            ConvolutionStrategy::Checked => MagnitudeStrategy::Newton,
            ConvolutionStrategy::Unchecked => MagnitudeStrategy::Bisect,
        });
        Ok(filter_gray_with(
            image,
            options.variant,
            convolution,
            magnitude,
        ))
    }

    /// Converts image into grayscale and filters it with the given options.
    pub fn filter_image(
        &self,
        image: &impl IntoGrayscale,
        options: &FilterOptions,
    ) -> Result<GrayscaleImage, FilterError> {
        self.filter(&image.to_grayscale(), options)
    }

    #[inline(always)]
    pub fn cpu_extensions(&self) -> CpuExtensions {
        self.cpu_extensions
    }

    /// # Safety
    /// This is unsafe because this method allows you to set a CPU-extensions
    /// that is not actually supported by your CPU.
    pub unsafe fn set_cpu_extensions(&mut self, extensions: CpuExtensions) {
        debug!("CPU extensions of edge detector: {extensions:?}");
        self.cpu_extensions = extensions;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_image() -> GrayscaleImage {
        GrayscaleImage::from_fn(5, 4, |_, y| if y >= 2 { 200 } else { 0 })
    }

    #[test]
    fn default_options() {
        let options = FilterOptions::new();
        assert_eq!(options.variant, Some(FilterVariant::Sobel));
        assert_eq!(options.method, Method::Checked);
        assert_eq!(options.magnitude, None);
        assert_eq!(options.simd_backend, None);
    }

    #[test]
    fn methods_give_expected_sizes() {
        let detector = EdgeDetector::new();
        let image = step_image();
        for (method, size) in [
            (Method::Checked, (3, 2)),
            (Method::Fast, (3, 2)),
            (Method::Math, (3, 2)),
            (Method::Simd, (5, 4)),
        ] {
            let options = FilterOptions::new().method(method);
            let result = detector.filter(&image, &options).unwrap();
            assert_eq!((result.width(), result.height()), size, "{method:?}");
        }
    }

    #[test]
    fn unknown_variant_gives_zero_image() {
        let detector = EdgeDetector::new();
        let options = FilterOptions::new()
            .variant(None::<FilterVariant>)
            .method(Method::Fast);
        let result = detector.filter(&step_image(), &options).unwrap();
        assert_eq!((result.width(), result.height()), (3, 2));
        assert!(result.buffer().iter().all(|&v| v == 0));
    }

    #[test]
    fn magnitude_override() {
        let detector = EdgeDetector::new();
        let image = step_image();
        let expected = detector.filter(&image, &FilterOptions::new()).unwrap();
        for magnitude in MagnitudeStrategy::ALL {
            let options = FilterOptions::new().magnitude(magnitude);
            let result = detector.filter(&image, &options).unwrap();
            assert_eq!(result, expected, "{magnitude:?}");
        }
    }
}
