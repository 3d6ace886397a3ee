use std::arch::aarch64::*;

use super::native;
use crate::neon_utils;

/// For safety, it is necessary to ensure the following conditions:
/// - length of all rows in `rows` is equal to `dst_row.len()`
/// - CPU supports NEON
#[target_feature(enable = "neon")]
pub(crate) unsafe fn dx_row(rows: [&[u8]; 3], dst_row: &mut [u16]) {
    let width = dst_row.len();
    let mut x = 1;
    while x + 9 <= width {
        let left = column_sum_x8(rows, x - 1);
        let right = column_sum_x8(rows, x + 1);
        neon_utils::store_u16x8(dst_row, x, vabdq_u16(right, left));
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
/// - CPU supports NEON
#[target_feature(enable = "neon")]
pub(crate) unsafe fn dy_row(rows: [&[u8]; 3], dst_row: &mut [u16]) {
    let width = dst_row.len();
    let mut x = 1;
    while x + 9 <= width {
        let top = row_sum_x8(rows[0], x);
        let bottom = row_sum_x8(rows[2], x);
        neon_utils::store_u16x8(dst_row, x, vabdq_u16(bottom, top));
        x += 8;
    }
    if width > 0 {
        dst_row[0] = native::dy_pixel(rows, 0);
    }
    for x in x..width {
        dst_row[x] = native::dy_pixel(rows, x);
    }
}

#[inline]
#[target_feature(enable = "neon")]
unsafe fn column_sum_x8(rows: [&[u8]; 3], x: usize) -> uint16x8_t {
    let top = neon_utils::load_u16x8_widen(rows[0], x);
    let center = neon_utils::load_u16x8_widen(rows[1], x);
    let bottom = neon_utils::load_u16x8_widen(rows[2], x);
    vaddq_u16(vaddq_u16(top, bottom), vshlq_n_u16::<1>(center))
}

#[inline]
#[target_feature(enable = "neon")]
unsafe fn row_sum_x8(row: &[u8], x: usize) -> uint16x8_t {
    let left = neon_utils::load_u16x8_widen(row, x - 1);
    let center = neon_utils::load_u16x8_widen(row, x);
    let right = neon_utils::load_u16x8_widen(row, x + 1);
    vaddq_u16(vaddq_u16(left, right), vshlq_n_u16::<1>(center))
}
