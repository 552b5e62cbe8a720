//! Display lookup table for palette colors and feedback pegs.
//!
//! Pure data: no I/O.

use crossterm::style::Color as TermColor;

use crate::types::Color;

/// Glyph drawn for each code slot in color mode.
pub const SQUARE: char = '■';

/// Glyph drawn for each feedback peg in color mode.
pub const PEG: char = '●';

/// Plain-mode glyph for an exact match.
pub const PLAIN_EXACT: char = 'X';

/// Plain-mode glyph for a partial match.
pub const PLAIN_PARTIAL: char = 'o';

/// Terminal color used to draw a palette color.
pub fn term_color(color: Color) -> TermColor {
    match color {
        Color::Yellow => TermColor::Yellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::White => TermColor::White,
        Color::Magenta => TermColor::DarkMagenta,
    }
}

/// Peg colors: red for exact, white for partial.
pub fn exact_peg_color() -> TermColor {
    TermColor::DarkRed
}

pub fn partial_peg_color() -> TermColor {
    TermColor::White
}
