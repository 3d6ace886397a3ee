/// Sum of the column `x` with weights `[1, 2, 1]` from top to bottom.
#[inline(always)]
fn column_sum(rows: [&[u8]; 3], x: usize) -> u16 {
    rows[0][x] as u16 + 2 * rows[1][x] as u16 + rows[2][x] as u16
}

/// Sum of the neighbourhood of `x` in the row with weights `[1, 2, 1]`
/// from left to right.
#[inline(always)]
fn row_sum(row: &[u8], x: usize) -> u16 {
    let (left, right) = neighbours(x, row.len());
    row[left] as u16 + 2 * row[x] as u16 + row[right] as u16
}

#[inline(always)]
fn neighbours(x: usize, width: usize) -> (usize, usize) {
    (x.saturating_sub(1), (x + 1).min(width - 1))
}

#[inline(always)]
pub(crate) fn dx_pixel(rows: [&[u8]; 3], x: usize) -> u16 {
    let (left, right) = neighbours(x, rows[1].len());
    column_sum(rows, right).abs_diff(column_sum(rows, left))
}

#[inline(always)]
pub(crate) fn dy_pixel(rows: [&[u8]; 3], x: usize) -> u16 {
    row_sum(rows[2], x).abs_diff(row_sum(rows[0], x))
}

pub(crate) fn dx_row(rows: [&[u8]; 3], dst_row: &mut [u16]) {
    for (x, dst) in dst_row.iter_mut().enumerate() {
        *dst = dx_pixel(rows, x);
    }
}

pub(crate) fn dy_row(rows: [&[u8]; 3], dst_row: &mut [u16]) {
    for (x, dst) in dst_row.iter_mut().enumerate() {
        *dst = dy_pixel(rows, x);
    }
}
