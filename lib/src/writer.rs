use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::ConvertError;
use crate::grid::AsciiGrid;

/// Serialize a grid to any writer, one line per grid row.
///
/// Each row's characters are written with no separator, followed by a single
/// newline; the last row gets one too. The output therefore has exactly
/// `grid.rows()` lines of `grid.cols()` characters each.
pub fn write_grid<W: Write>(grid: &AsciiGrid, out: &mut W) -> io::Result<()> {
    let mut line = String::with_capacity(grid.cols() + 1);
    for i in 0..grid.rows() {
        line.clear();
        line.extend(grid.row(i));
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    Ok(())
}

/// Serialize a grid to a text file at `path`.
///
/// # Errors
/// Returns [`ConvertError::Write`] if the destination cannot be created
/// or written. The file handle is closed on every path out of here.
pub fn save_grid(grid: &AsciiGrid, path: &Path) -> Result<(), ConvertError> {
    let file = File::create(path).map_err(ConvertError::Write)?;
    let mut out = BufWriter::new(file);
    write_grid(grid, &mut out).map_err(ConvertError::Write)?;
    out.flush().map_err(ConvertError::Write)?;

    info!(
        "wrote {}x{} ascii grid to {}",
        grid.rows(),
        grid.cols(),
        path.display()
    );
    Ok(())
}
