//! Block-letter ASCII art for the galaxia hero title.

/// Height of every glyph, in lines.
pub const GLYPH_HEIGHT: usize = 5;

/// Width of every glyph, in columns.
pub const GLYPH_WIDTH: usize = 5;

/// Letters A-Z, 5 lines tall and 5 columns wide.
pub const LETTERS: [[&str; GLYPH_HEIGHT]; 26] = [
    // A
    [" ███ ", "█   █", "█████", "█   █", "█   █"],
    // B
    ["████ ", "█   █", "████ ", "█   █", "████ "],
    // C
    [" ████", "█    ", "█    ", "█    ", " ████"],
    // D
    ["████ ", "█   █", "█   █", "█   █", "████ "],
    // E
    ["█████", "█    ", "████ ", "█    ", "█████"],
    // F
    ["█████", "█    ", "████ ", "█    ", "█    "],
    // G
    [" ████", "█    ", "█  ██", "█   █", " ███ "],
    // H
    ["█   █", "█   █", "█████", "█   █", "█   █"],
    // I
    ["█████", "  █  ", "  █  ", "  █  ", "█████"],
    // J
    ["█████", "   █ ", "   █ ", "█  █ ", " ██  "],
    // K
    ["█   █", "█  █ ", "███  ", "█  █ ", "█   █"],
    // L
    ["█    ", "█    ", "█    ", "█    ", "█████"],
    // M
    ["█   █", "██ ██", "█ █ █", "█   █", "█   █"],
    // N
    ["█   █", "██  █", "█ █ █", "█  ██", "█   █"],
    // O
    [" ███ ", "█   █", "█   █", "█   █", " ███ "],
    // P
    ["████ ", "█   █", "████ ", "█    ", "█    "],
    // Q
    [" ███ ", "█   █", "█ █ █", "█  █ ", " ██ █"],
    // R
    ["████ ", "█   █", "████ ", "█  █ ", "█   █"],
    // S
    [" ████", "█    ", " ███ ", "    █", "████ "],
    // T
    ["█████", "  █  ", "  █  ", "  █  ", "  █  "],
    // U
    ["█   █", "█   █", "█   █", "█   █", " ███ "],
    // V
    ["█   █", "█   █", "█   █", " █ █ ", "  █  "],
    // W
    ["█   █", "█   █", "█ █ █", "██ ██", "█   █"],
    // X
    ["█   █", " █ █ ", "  █  ", " █ █ ", "█   █"],
    // Y
    ["█   █", " █ █ ", "  █  ", "  █  ", "  █  "],
    // Z
    ["█████", "   █ ", "  █  ", " █   ", "█████"],
];

/// Blank glyph used for spaces and unsupported characters.
pub const BLANK: [&str; GLYPH_HEIGHT] = ["     "; GLYPH_HEIGHT];

/// Glyph for a character; letters are case-insensitive.
pub fn glyph(c: char) -> [&'static str; GLYPH_HEIGHT] {
    let upper = c.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        LETTERS[(upper as u8 - b'A') as usize]
    } else {
        BLANK
    }
}

/// Columns needed to draw `text` with [`build_banner`].
pub fn banner_width(text: &str) -> usize {
    let count = text.chars().count();
    if count == 0 {
        0
    } else {
        count * GLYPH_WIDTH + (count - 1)
    }
}

/// Build block-letter art for `text`.
///
/// # Returns
/// A vector of [`GLYPH_HEIGHT`] strings, one per line of the art, with one
/// blank column between glyphs.
pub fn build_banner(text: &str) -> Vec<String> {
    (0..GLYPH_HEIGHT)
        .map(|row| {
            text.chars()
                .map(|c| glyph(c)[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_are_uniform() {
        for letter in LETTERS {
            for line in letter {
                assert_eq!(line.chars().count(), GLYPH_WIDTH);
            }
        }
    }

    #[test]
    fn test_build_banner() {
        let art = build_banner("Hi");
        assert_eq!(art.len(), GLYPH_HEIGHT);
        assert_eq!(art[0], "█   █ █████");
        assert!(art.iter().all(|line| line.chars().count() == banner_width("Hi")));
    }

    #[test]
    fn test_unknown_chars_are_blank() {
        assert_eq!(glyph('?'), BLANK);
        assert_eq!(glyph(' '), BLANK);
        assert_eq!(glyph('a'), glyph('A'));
    }

    #[test]
    fn test_banner_width() {
        assert_eq!(banner_width(""), 0);
        assert_eq!(banner_width("A"), 5);
        assert_eq!(banner_width("SAI SARTHAK"), 11 * 5 + 10);
    }
}
