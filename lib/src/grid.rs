use image::GrayImage;
use log::debug;

use crate::error::ConvertError;
use crate::ramp::shade_char;
use crate::scale::Scale;
use crate::shade::average_shade;

/// A rectangular grid of ramp characters, one per source block.
///
/// Row-major and immutable once built: row `i` of the grid becomes line `i`
/// of the serialized output. Rows run along the image height axis, so each
/// line of output spans the full image width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiGrid {
    cells: Vec<char>,
    rows: usize,
    cols: usize,
}

impl AsciiGrid {
    /// Scan a greyscale buffer in blocks and map each block's average
    /// intensity to a ramp character.
    ///
    /// The buffer is partitioned into non-overlapping blocks of
    /// `scale.horizontal() × scale.vertical()` pixels. Blocks in the final
    /// row and column are clipped to the buffer bounds; they are averaged
    /// over the pixels they actually contain and never dropped. The result
    /// has `ceil(height / vertical)` rows of `ceil(width / horizontal)`
    /// characters.
    ///
    /// # Errors
    /// Returns [`ConvertError::EmptyImage`] if the buffer has zero width
    /// or height.
    pub fn build(shades: &GrayImage, scale: Scale) -> Result<AsciiGrid, ConvertError> {
        let (width, height) = shades.dimensions();
        if width == 0 || height == 0 {
            return Err(ConvertError::EmptyImage);
        }

        let h_block = scale.horizontal();
        let v_block = scale.vertical();
        let cols = width.div_ceil(h_block) as usize;
        let rows = height.div_ceil(v_block) as usize;
        debug!("building {rows}x{cols} grid from {width}x{height} image");

        let mut cells = Vec::with_capacity(rows * cols);
        for j in 0..rows as u32 {
            let ys = j * v_block..((j + 1) * v_block).min(height);
            for i in 0..cols as u32 {
                let xs = i * h_block..((i + 1) * h_block).min(width);
                let shading = average_shade(shades, xs, ys.clone());
                cells.push(shade_char(shading));
            }
        }

        Ok(AsciiGrid { cells, rows, cols })
    }

    /// Number of rows (output lines).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of characters per row.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// One row of the grid, in output order.
    pub fn row(&self, i: usize) -> &[char] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    /// Character at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> char {
        self.cells[i * self.cols + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn scale(s: u32) -> Scale {
        Scale::from_horizontal(s)
    }

    #[test]
    fn test_all_black_20x20_scale_10() {
        // horizontal block 10, vertical block floor(10 / 1.3) = 7:
        // 2 characters per row, ceil(20 / 7) = 3 rows, all darkest.
        let img = GrayImage::from_pixel(20, 20, Luma([0]));
        let grid = AsciiGrid::build(&img, scale(10)).unwrap();

        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 2);
        for i in 0..grid.rows() {
            for j in 0..grid.cols() {
                assert_eq!(grid.get(i, j), 'M');
            }
        }
    }

    #[test]
    fn test_single_white_pixel_scale_1() {
        let img = GrayImage::from_pixel(1, 1, Luma([255]));
        let grid = AsciiGrid::build(&img, scale(1)).unwrap();

        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.cols(), 1);
        assert_eq!(grid.get(0, 0), ' ');
    }

    #[test]
    fn test_empty_image_rejected() {
        let img = GrayImage::new(0, 0);
        assert!(matches!(
            AsciiGrid::build(&img, scale(10)),
            Err(ConvertError::EmptyImage)
        ));

        let img = GrayImage::new(10, 0);
        assert!(matches!(
            AsciiGrid::build(&img, scale(10)),
            Err(ConvertError::EmptyImage)
        ));
    }

    #[test]
    fn test_non_divisible_dimensions() {
        // 13 wide with block 5 -> ceil(13 / 5) = 3 columns;
        // 7 high with block floor(5 / 1.3) = 3 -> ceil(7 / 3) = 3 rows.
        let img = GrayImage::from_pixel(13, 7, Luma([128]));
        let grid = AsciiGrid::build(&img, scale(5)).unwrap();

        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.rows(), 3);
        // Uniform input: every block, clipped or not, averages to 128.
        for i in 0..grid.rows() {
            for j in 0..grid.cols() {
                assert_eq!(grid.get(i, j), '7');
            }
        }
    }

    #[test]
    fn test_clipped_edge_block_averages_own_pixels() {
        // 11 wide, block 10: the second column is a single pixel wide.
        // Make that strip white and the rest black; the clipped block must
        // average only its own pixels and come out bright.
        let mut img = GrayImage::from_pixel(11, 7, Luma([0]));
        for y in 0..7 {
            img.put_pixel(10, y, Luma([255]));
        }
        let grid = AsciiGrid::build(&img, scale(10)).unwrap();

        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.get(0, 0), 'M');
        assert_eq!(grid.get(0, 1), ' ');
    }

    #[test]
    fn test_blocks_tile_without_gaps() {
        // With 2x1 blocks a single bright pixel lifts exactly one cell out
        // of the darkest band, wherever it is, including clipped edges.
        for (px, py) in [(0, 0), (7, 3), (18, 8), (18, 0), (0, 8)] {
            let mut img = GrayImage::from_pixel(19, 9, Luma([0]));
            img.put_pixel(px, py, Luma([255]));
            let grid = AsciiGrid::build(&img, scale(2)).unwrap();

            let mut bright_cells = 0;
            for i in 0..grid.rows() {
                for j in 0..grid.cols() {
                    if grid.get(i, j) != 'M' {
                        bright_cells += 1;
                    }
                }
            }
            assert_eq!(bright_cells, 1, "pixel ({px}, {py})");
        }
    }

    #[test]
    fn test_deterministic() {
        let mut img = GrayImage::new(17, 9);
        for (x, y, px) in img.enumerate_pixels_mut() {
            *px = Luma([(x * 13 + y * 7) as u8]);
        }
        let a = AsciiGrid::build(&img, scale(4)).unwrap();
        let b = AsciiGrid::build(&img, scale(4)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_row_slices() {
        let img = GrayImage::from_pixel(6, 6, Luma([255]));
        let grid = AsciiGrid::build(&img, scale(3)).unwrap();

        assert_eq!(grid.cols(), 2);
        for i in 0..grid.rows() {
            assert_eq!(grid.row(i), &[' ', ' ']);
        }
    }
}
