//! ASCII Shade - greyscale image to ASCII art text converter
//!
//! This library partitions a greyscale image into rectangular blocks,
//! averages each block's intensity, and maps the average onto a fixed
//! character ramp, writing the result as plain text, one line per block row.
//!
//! # Example
//! ```no_run
//! use std::path::Path;
//!
//! ascii_shade::convert(
//!     Path::new("photo.jpg"),
//!     Path::new("photo.txt"),
//!     "10",
//! ).unwrap();
//! ```

pub mod error;
pub mod grid;
pub mod pipeline;
pub mod ramp;
pub mod scale;
pub mod shade;
pub mod writer;

// Re-export main types for convenience
pub use error::{ConvertError, ErrorKind};
pub use grid::AsciiGrid;
pub use pipeline::{convert, convert_shades, decode_shades};
pub use scale::Scale;
