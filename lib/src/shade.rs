use std::ops::Range;

use image::GrayImage;

/// Compute the integer mean intensity of a rectangular block.
///
/// The mean is the floor division of the intensity sum by the actual number
/// of pixels in the block, so clipped edge blocks average over exactly the
/// pixels they contain.
///
/// # Arguments
/// * `shades` - Greyscale source buffer
/// * `xs` - Column range of the block, within the buffer width
/// * `ys` - Row range of the block, within the buffer height
///
/// # Panics
/// Debug builds assert the ranges are non-empty and in bounds; callers
/// (the grid builder) guarantee both.
pub fn average_shade(shades: &GrayImage, xs: Range<u32>, ys: Range<u32>) -> u8 {
    debug_assert!(!xs.is_empty() && !ys.is_empty(), "empty block");
    debug_assert!(xs.end <= shades.width() && ys.end <= shades.height());

    let mut sum: u64 = 0;
    for y in ys.clone() {
        for x in xs.clone() {
            sum += shades.get_pixel(x, y)[0] as u64;
        }
    }

    let count = xs.len() as u64 * ys.len() as u64;
    (sum / count) as u8
}
