use std::arch::x86_64::*;

#[inline(always)]
pub unsafe fn loadu_si128<T>(buf: &[T], index: usize) -> __m128i {
    _mm_loadu_si128(buf.get_unchecked(index..).as_ptr() as *const __m128i)
}

#[inline(always)]
pub unsafe fn loadl_epi64<T>(buf: &[T], index: usize) -> __m128i {
    _mm_loadl_epi64(buf.get_unchecked(index..).as_ptr() as *const __m128i)
}

#[inline(always)]
pub unsafe fn storeu_si128<T>(buf: &mut [T], index: usize, v: __m128i) {
    _mm_storeu_si128(buf.get_unchecked_mut(index..).as_mut_ptr() as *mut __m128i, v);
}

#[inline(always)]
pub unsafe fn storeu_si256<T>(buf: &mut [T], index: usize, v: __m256i) {
    _mm256_storeu_si256(buf.get_unchecked_mut(index..).as_mut_ptr() as *mut __m256i, v);
}
