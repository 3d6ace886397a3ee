//! Bindings to the native [Simd](https://github.com/ermig1979/Simd) library.
use super::Derivative;

#[link(name = "Simd")]
extern "C" {
    fn SimdSobelDxAbs(
        src: *const u8,
        src_stride: usize,
        width: usize,
        height: usize,
        dst: *mut u8,
        dst_stride: usize,
    );
    fn SimdSobelDyAbs(
        src: *const u8,
        src_stride: usize,
        width: usize,
        height: usize,
        dst: *mut u8,
        dst_stride: usize,
    );
}

/// Buffers must be already checked against the contract of the primitive.
pub(crate) fn sobel_abs(
    derivative: Derivative,
    src: &[u8],
    src_stride: usize,
    width: usize,
    height: usize,
    dst: &mut [u8],
    dst_stride: usize,
) {
    let function = match derivative {
        Derivative::Dx => SimdSobelDxAbs,
        Derivative::Dy => SimdSobelDyAbs,
    };
    // SAFETY: `src` holds `height` rows of `src_stride >= width` bytes
    // and `dst` holds `height` rows of `dst_stride >= 2 * width` bytes.
    unsafe {
        function(
            src.as_ptr(),
            src_stride,
            width,
            height,
            dst.as_mut_ptr(),
            dst_stride,
        )
    }
}
