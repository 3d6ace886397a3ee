use std::arch::x86_64::*;

use super::native;
use crate::simd_utils;

/// For safety, it is necessary to ensure the following conditions:
/// - length of all rows in `rows` is equal to `dst_row.len()`
/// - CPU supports SSE4.1
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn dx_row(rows: [&[u8]; 3], dst_row: &mut [u16]) {
    let width = dst_row.len();
    let mut x = 1;
    // Last load reads bytes up to `x + 9`
    while x + 9 <= width {
        let left = column_sum_x8(rows, x - 1);
        let right = column_sum_x8(rows, x + 1);
        let dx = _mm_abs_epi16(_mm_sub_epi16(right, left));
        simd_utils::storeu_si128(dst_row, x, dx);
        x += 8;
    }
    if width > 0 {
        dst_row[0] = native::dx_pixel(rows, 0);
    }
    for x in x..width {
        dst_row[x] = native::dx_pixel(rows, x);
    }
}

/// For safety, it is necessary to ensure the following conditions:
/// - length of all rows in `rows` is equal to `dst_row.len()`
/// - CPU supports SSE4.1
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn dy_row(rows: [&[u8]; 3], dst_row: &mut [u16]) {
    let width = dst_row.len();
    let mut x = 1;
    while x + 9 <= width {
        let top = row_sum_x8(rows[0], x);
        let bottom = row_sum_x8(rows[2], x);
        let dy = _mm_abs_epi16(_mm_sub_epi16(bottom, top));
        simd_utils::storeu_si128(dst_row, x, dy);
        x += 8;
    }
    if width > 0 {
        dst_row[0] = native::dy_pixel(rows, 0);
    }
    for x in x..width {
        dst_row[x] = native::dy_pixel(rows, x);
    }
}

/// `rows[0][x..x + 8] + 2 * rows[1][x..x + 8] + rows[2][x..x + 8]` as i16x8.
#[inline]
#[target_feature(enable = "sse4.1")]
unsafe fn column_sum_x8(rows: [&[u8]; 3], x: usize) -> __m128i {
    let top = _mm_cvtepu8_epi16(simd_utils::loadl_epi64(rows[0], x));
    let center = _mm_cvtepu8_epi16(simd_utils::loadl_epi64(rows[1], x));
    let bottom = _mm_cvtepu8_epi16(simd_utils::loadl_epi64(rows[2], x));
    _mm_add_epi16(_mm_add_epi16(top, bottom), _mm_add_epi16(center, center))
}

/// `row[x - 1..x + 7] + 2 * row[x..x + 8] + row[x + 1..x + 9]` as i16x8.
#[inline]
#[target_feature(enable = "sse4.1")]
unsafe fn row_sum_x8(row: &[u8], x: usize) -> __m128i {
    let left = _mm_cvtepu8_epi16(simd_utils::loadl_epi64(row, x - 1));
    let center = _mm_cvtepu8_epi16(simd_utils::loadl_epi64(row, x));
    let right = _mm_cvtepu8_epi16(simd_utils::loadl_epi64(row, x + 1));
    _mm_add_epi16(_mm_add_epi16(left, right), _mm_add_epi16(center, center))
}
