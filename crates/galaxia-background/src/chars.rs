//! Glyphs used to draw the galaxy on terminal cells.

/// Star glyphs from faintest to most prominent.
pub const STAR_CHARS: &[char] = &['·', '+', '*', '✦', '✧'];

/// Glyph for the soft glow around a star.
pub const HALO_CHAR: char = '·';

/// Thin line glyphs: horizontal, falling diagonal, vertical, rising diagonal.
pub const THIN_LINE_CHARS: [char; 4] = ['─', '╲', '│', '╱'];

/// Heavy line glyphs, same order as [`THIN_LINE_CHARS`].
pub const HEAVY_LINE_CHARS: [char; 4] = ['━', '╲', '┃', '╱'];
