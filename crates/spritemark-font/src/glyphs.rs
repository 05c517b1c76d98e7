//! The embedded 8x8 glyph table.
//!
//! Thirty-seven glyphs: digits, lowercase letters, and space. Each
//! glyph is eight row bytes with the most significant bit as the
//! leftmost column. The table is process-lifetime constant data; no
//! system font resource is ever consulted.

/// Native glyph edge length in pixels, before scaling.
pub const GLYPH_SIZE: i32 = 8;

/// Number of glyphs in the table.
pub const GLYPH_COUNT: usize = 37;

/// Row bitmaps: indices `0..10` are `'0'..='9'`, `10..36` are
/// `'a'..='z'`, and `36` is space.
pub static GLYPHS: [[u8; 8]; GLYPH_COUNT] = [
    // 0-9
    [0x3C, 0x66, 0x6E, 0x76, 0x66, 0x66, 0x3C, 0x00],
    [0x18, 0x38, 0x18, 0x18, 0x18, 0x18, 0x3C, 0x00],
    [0x3C, 0x66, 0x06, 0x0C, 0x30, 0x60, 0x7E, 0x00],
    [0x3C, 0x66, 0x06, 0x1C, 0x06, 0x66, 0x3C, 0x00],
    [0x06, 0x0E, 0x1E, 0x66, 0x7F, 0x06, 0x06, 0x00],
    [0x7E, 0x60, 0x7C, 0x06, 0x06, 0x66, 0x3C, 0x00],
    [0x3C, 0x60, 0x7C, 0x66, 0x66, 0x66, 0x3C, 0x00],
    [0x7E, 0x06, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x00],
    [0x3C, 0x66, 0x66, 0x3C, 0x66, 0x66, 0x3C, 0x00],
    [0x3C, 0x66, 0x66, 0x3E, 0x06, 0x66, 0x3C, 0x00],
    // a-z
    [0x00, 0x00, 0x3C, 0x06, 0x3E, 0x66, 0x3E, 0x00],
    [0x60, 0x60, 0x7C, 0x66, 0x66, 0x66, 0x7C, 0x00],
    [0x00, 0x00, 0x3C, 0x60, 0x60, 0x60, 0x3C, 0x00],
    [0x06, 0x06, 0x3E, 0x66, 0x66, 0x66, 0x3E, 0x00],
    [0x00, 0x00, 0x3C, 0x66, 0x7E, 0x60, 0x3C, 0x00],
    [0x0C, 0x18, 0x18, 0x7C, 0x18, 0x18, 0x18, 0x00],
    [0x00, 0x00, 0x3E, 0x66, 0x66, 0x3E, 0x06, 0x3C],
    [0x60, 0x60, 0x7C, 0x66, 0x66, 0x66, 0x66, 0x00],
    [0x18, 0x00, 0x38, 0x18, 0x18, 0x18, 0x3C, 0x00],
    [0x0C, 0x00, 0x0C, 0x0C, 0x0C, 0x6C, 0x38, 0x00],
    [0x60, 0x60, 0x66, 0x6C, 0x78, 0x6C, 0x66, 0x00],
    [0x38, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C, 0x00],
    [0x00, 0x00, 0xEC, 0x76, 0x66, 0x66, 0x66, 0x00],
    [0x00, 0x00, 0x7C, 0x66, 0x66, 0x66, 0x66, 0x00],
    [0x00, 0x00, 0x3C, 0x66, 0x66, 0x66, 0x3C, 0x00],
    [0x00, 0x00, 0x7C, 0x66, 0x66, 0x7C, 0x60, 0x60],
    [0x00, 0x00, 0x3E, 0x66, 0x66, 0x3E, 0x06, 0x06],
    [0x00, 0x00, 0x6C, 0x38, 0x30, 0x30, 0x30, 0x00],
    [0x00, 0x00, 0x3E, 0x60, 0x3C, 0x06, 0x7C, 0x00],
    [0x00, 0x18, 0x7E, 0x18, 0x18, 0x18, 0x0E, 0x00],
    [0x00, 0x00, 0x66, 0x66, 0x66, 0x66, 0x3E, 0x00],
    [0x00, 0x00, 0x66, 0x66, 0x66, 0x3C, 0x18, 0x00],
    [0x00, 0x00, 0x66, 0x6E, 0x7E, 0x76, 0x62, 0x00],
    [0x00, 0x00, 0x66, 0x3C, 0x18, 0x3C, 0x66, 0x00],
    [0x00, 0x00, 0x66, 0x66, 0x66, 0x3E, 0x06, 0x3C],
    [0x00, 0x00, 0x7E, 0x0C, 0x18, 0x30, 0x7E, 0x00],
    // space
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
];

/// Looks up the bitmap for `ch`.
///
/// Only digits, lowercase letters, and space are present; every other
/// character returns `None` and should be rendered as nothing.
pub fn glyph(ch: char) -> Option<&'static [u8; 8]> {
    let idx = match ch {
        '0'..='9' => ch as usize - '0' as usize,
        'a'..='z' => 10 + (ch as usize - 'a' as usize),
        ' ' => 36,
        _ => return None,
    };
    Some(&GLYPHS[idx])
}
