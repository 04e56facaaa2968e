use std::path::Path;

use image::GrayImage;
use log::debug;

use crate::error::ConvertError;
use crate::grid::AsciiGrid;
use crate::scale::Scale;
use crate::writer::save_grid;

/// Decode an image file into a greyscale intensity buffer.
///
/// Color channels are collapsed to 8-bit luma by the image crate; the
/// pipeline never inspects color, EXIF, or alpha.
///
/// # Errors
/// Returns [`ConvertError::Decode`] if the file cannot be read or is not
/// a supported image format.
pub fn decode_shades(path: &Path) -> Result<GrayImage, ConvertError> {
    let img = image::open(path).map_err(ConvertError::Decode)?;
    let shades = img.into_luma8();
    debug!(
        "decoded {} as {}x{} greyscale",
        path.display(),
        shades.width(),
        shades.height()
    );
    Ok(shades)
}

/// Convert an image file to an ASCII art text file.
///
/// Runs scale validation, image decode, grid building, and serialization in
/// that order, stopping at the first failure. The destination is not
/// touched until decode and build have succeeded, so a failed conversion
/// never leaves a partial output file behind.
///
/// # Arguments
/// * `image_path` - Source image (any format the image crate decodes)
/// * `dest_path` - Destination text file, created or truncated on success
/// * `raw_scale` - Scale input as the user typed it, e.g. `"10"` or `"3.9"`
pub fn convert(image_path: &Path, dest_path: &Path, raw_scale: &str) -> Result<(), ConvertError> {
    let scale = Scale::resolve(raw_scale)?;
    debug!(
        "resolved scale: {} horizontal, {} vertical",
        scale.horizontal(),
        scale.vertical()
    );

    let shades = decode_shades(image_path)?;
    convert_shades(&shades, dest_path, scale)
}

/// Convert an already-decoded greyscale buffer, for callers that bring
/// their own decoder.
pub fn convert_shades(
    shades: &GrayImage,
    dest_path: &Path,
    scale: Scale,
) -> Result<(), ConvertError> {
    let grid = AsciiGrid::build(shades, scale)?;
    save_grid(&grid, dest_path)
}
