use std::str::FromStr;

use crate::error::ConvertError;

/// Character cells are taller than they are wide, so a block covers fewer
/// pixels vertically than horizontally by this ratio.
const CHAR_ASPECT: f64 = 1.3;

/// Validated conversion scale: how many source pixels one output character
/// covers along each axis.
///
/// The horizontal block width is the user-supplied scale; the vertical block
/// height is derived as `floor(scale / 1.3)`, clamped up to 1 so a small
/// scale never produces a degenerate block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    horizontal: u32,
    vertical: u32,
}

impl Scale {
    /// Validate and normalize a raw scale value from user input.
    ///
    /// The input is parsed as a floating-point number and truncated toward
    /// zero, so `"10"`, `"10.0"` and `"10.9"` all resolve to 10.
    ///
    /// # Errors
    /// Returns [`ConvertError::InvalidScale`] if the input does not parse
    /// or the truncated value is less than 1.
    pub fn resolve(raw: &str) -> Result<Scale, ConvertError> {
        let invalid = || ConvertError::InvalidScale(raw.to_string());

        let parsed: f64 = raw.trim().parse().map_err(|_| invalid())?;
        let truncated = parsed.trunc();
        if !(1.0..=u32::MAX as f64).contains(&truncated) {
            return Err(invalid());
        }

        Ok(Scale::from_horizontal(truncated as u32))
    }

    /// Build a scale from an already-validated horizontal block width.
    pub fn from_horizontal(horizontal: u32) -> Scale {
        assert!(horizontal >= 1, "scale must be at least 1");

        let vertical = ((horizontal as f64 / CHAR_ASPECT) as u32).max(1);
        Scale {
            horizontal,
            vertical,
        }
    }

    /// Block width in source pixels.
    pub fn horizontal(&self) -> u32 {
        self.horizontal
    }

    /// Block height in source pixels.
    pub fn vertical(&self) -> u32 {
        self.vertical
    }
}

impl FromStr for Scale {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Scale, ConvertError> {
        Scale::resolve(s)
    }
}
