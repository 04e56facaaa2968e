//! The fixed character ramp.
//!
//! Each band maps a half-open intensity interval to one printable character,
//! darkest to lightest. The bands are evaluated in ascending order and the
//! first match wins.

/// Upper bounds (exclusive) of the ramp bands and their characters.
///
/// Intensities of 240 and above fall through to [`BRIGHTEST_CHAR`]. The two
/// adjacent `N` bands are intentional; the ramp is defined with ten bands
/// and nine distinct characters.
pub const SHADE_RAMP: [(u8, char); 9] = [
    (50, 'M'),
    (75, 'N'),
    (100, 'N'),
    (125, '?'),
    (150, '7'),
    (175, '+'),
    (200, '='),
    (225, ','),
    (240, '.'),
];

/// Character for the brightest band, 240 and above.
pub const BRIGHTEST_CHAR: char = ' ';

/// Map a greyscale intensity to its ramp character.
///
/// Pure function of the intensity alone; 0 (black) maps to the densest
/// character, 255 (white) to a space.
pub fn shade_char(value: u8) -> char {
    for &(upper, ch) in &SHADE_RAMP {
        if value < upper {
            return ch;
        }
    }
    BRIGHTEST_CHAR
}
