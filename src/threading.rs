use rayon::current_num_threads;
use rayon::prelude::*;

use crate::GrayscaleImage;

/// Splits rows of the image into parts and calls `row_fn(y, row)`
/// for every row in `rayon` thread pool.
///
/// Every part owns a disjoint range of rows. Returns `false`
/// without touching the image if splitting doesn't make sense.
pub(crate) fn for_each_row_par<F>(image: &mut GrayscaleImage, row_fn: &F) -> bool
where
    F: Fn(u32, &mut [u8]) + Sync,
{
    let width = image.width() as usize;
    let height = image.height();
    let stride = image.stride();
    let max_num_parts = calculate_max_h_parts_number(image.width(), height);
    let num_threads = current_num_threads() as u32;
    if num_threads < 2 || max_num_parts < 2 || stride == 0 {
        return false;
    }
    let num_parts = num_threads.min(max_num_parts);
    let rows_per_part = height.div_ceil(num_parts) as usize;
    let rows_size = stride * height as usize;
    image.buffer_mut()[..rows_size]
        .par_chunks_mut(rows_per_part * stride)
        .enumerate()
        .for_each(|(part, rows)| {
            let first_row = part * rows_per_part;
            for (i, row) in rows.chunks_mut(stride).enumerate() {
                row_fn((first_row + i) as u32, &mut row[..width]);
            }
        });
    true
}

/// It is not optimal to split images on too small parts.
/// We have to calculate minimal height of one part.
/// For small images, it is equal to `constant / area`.
/// For tall images, it is equal to `height / 256`.
fn calculate_max_h_parts_number(width: u32, height: u32) -> u32 {
    if width == 0 || height == 0 {
        return 1;
    }
    let area = height as u64 * height.max(width) as u64;
    let min_height = ((1u64 << 14) / area).max(height as u64 / 256) as u32;
    height / min_height.max(1)
}
