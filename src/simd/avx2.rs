use std::arch::x86_64::*;

use super::{native, sse4};
use crate::simd_utils;

/// For safety, it is necessary to ensure the following conditions:
/// - length of all rows in `rows` is equal to `dst_row.len()`
/// - CPU supports AVX2
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn dx_row(rows: [&[u8]; 3], dst_row: &mut [u16]) {
    let width = dst_row.len();
    let mut x = 1;
    // Last load reads bytes up to `x + 17`
    while x + 17 <= width {
        let left = column_sum_x16(rows, x - 1);
        let right = column_sum_x16(rows, x + 1);
        let dx = _mm256_abs_epi16(_mm256_sub_epi16(right, left));
        simd_utils::storeu_si256(dst_row, x, dx);
        x += 16;
    }
    if x == 1 {
        sse4::dx_row(rows, dst_row);
        return;
    }
    dst_row[0] = native::dx_pixel(rows, 0);
    for x in x..width {
        dst_row[x] = native::dx_pixel(rows, x);
    }
}

/// For safety, it is necessary to ensure the following conditions:
/// - length of all rows in `rows` is equal to `dst_row.len()`
/// - CPU supports AVX2
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn dy_row(rows: [&[u8]; 3], dst_row: &mut [u16]) {
    let width = dst_row.len();
    let mut x = 1;
    while x + 17 <= width {
        let top = row_sum_x16(rows[0], x);
        let bottom = row_sum_x16(rows[2], x);
        let dy = _mm256_abs_epi16(_mm256_sub_epi16(bottom, top));
        simd_utils::storeu_si256(dst_row, x, dy);
        x += 16;
    }
    if x == 1 {
        sse4::dy_row(rows, dst_row);
        return;
    }
    dst_row[0] = native::dy_pixel(rows, 0);
    for x in x..width {
        dst_row[x] = native::dy_pixel(rows, x);
    }
}

#[inline]
#[target_feature(enable = "avx2")]
unsafe fn column_sum_x16(rows: [&[u8]; 3], x: usize) -> __m256i {
    let top = _mm256_cvtepu8_epi16(simd_utils::loadu_si128(rows[0], x));
    let center = _mm256_cvtepu8_epi16(simd_utils::loadu_si128(rows[1], x));
    let bottom = _mm256_cvtepu8_epi16(simd_utils::loadu_si128(rows[2], x));
    _mm256_add_epi16(_mm256_add_epi16(top, bottom), _mm256_add_epi16(center, center))
}

#[inline]
#[target_feature(enable = "avx2")]
unsafe fn row_sum_x16(row: &[u8], x: usize) -> __m256i {
    let left = _mm256_cvtepu8_epi16(simd_utils::loadu_si128(row, x - 1));
    let center = _mm256_cvtepu8_epi16(simd_utils::loadu_si128(row, x));
    let right = _mm256_cvtepu8_epi16(simd_utils::loadu_si128(row, x + 1));
    _mm256_add_epi16(_mm256_add_epi16(left, right), _mm256_add_epi16(center, center))
}
