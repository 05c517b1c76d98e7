//! Glyph and string rasterization.
//!
//! Stateless painters over a [`Surface`]: the same inputs always
//! produce the same pixels, so callers own all caching (see the overlay
//! cache in the render crate).

use spritemark_core::Color;

use crate::glyphs::{glyph, GLYPH_SIZE};
use crate::surface::Surface;

/// Paints one glyph with its top-left corner at `(x, y)`.
///
/// Each set bit becomes a `scale` by `scale` block of `color`; bit 7 of
/// a row byte is the leftmost column. Unsupported characters and a
/// non-positive `scale` paint nothing. Blocks falling outside the
/// surface are clipped pixel by pixel.
pub fn draw_glyph(surface: &mut Surface, ch: char, x: i32, y: i32, color: Color, scale: i32) {
    if scale <= 0 {
        return;
    }
    let Some(rows) = glyph(ch) else {
        return;
    };
    for (row, row_data) in rows.iter().enumerate() {
        for col in 0..GLYPH_SIZE {
            if row_data & (0x80u8 >> col) == 0 {
                continue;
            }
            let block_x = x + col * scale;
            let block_y = y + row as i32 * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    surface.put(block_x + dx, block_y + dy, color);
                }
            }
        }
    }
}

/// Draws `text` left to right from `(x, y)` and returns the final
/// cursor position.
///
/// A newline resets the horizontal cursor to the starting `x` and
/// advances the vertical cursor by one glyph height. Every other
/// character, supported or not, draws (or paints nothing) and advances
/// the horizontal cursor by one glyph width, so spaces and unsupported
/// characters still hold their column. A non-positive `scale` paints
/// nothing and leaves the cursor at `(x, y)`; so does an empty string.
pub fn draw_string(
    surface: &mut Surface,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    scale: i32,
) -> (i32, i32) {
    if scale <= 0 {
        return (x, y);
    }
    let advance = GLYPH_SIZE * scale;
    let mut cx = x;
    let mut cy = y;
    for ch in text.chars() {
        if ch == '\n' {
            cy += advance;
            cx = x;
        } else {
            draw_glyph(surface, ch, cx, cy, color, scale);
            cx += advance;
        }
    }
    (cx, cy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_surface() -> Surface {
        Surface::new(230, 30, Color::WHITE)
    }

    #[test]
    fn cursor_advances_one_width_per_character() {
        let mut surface = white_surface();
        let (cx, cy) = draw_string(&mut surface, "fps 300 sprites 100", 10, 10, Color::BLACK, 1);
        assert_eq!(cx, 10 + 19 * 8);
        assert_eq!(cy, 10);
    }

    #[test]
    fn unsupported_characters_advance_without_pixels() {
        let mut surface = white_surface();
        let (cx, _) = draw_string(&mut surface, "A", 10, 10, Color::BLACK, 1);
        assert_eq!(cx, 18);
        assert_eq!(surface.count_pixels(Color::BLACK), 0);
    }

    #[test]
    fn spaces_hold_their_column() {
        let mut with_space = white_surface();
        let mut without = white_surface();
        draw_string(&mut with_space, "a b", 0, 0, Color::BLACK, 1);
        draw_string(&mut without, "axb", 0, 0, Color::BLACK, 1);
        // The trailing glyph lands at the same column either way.
        for y in 0..8 {
            for x in 16..24 {
                assert_eq!(with_space.get(x, y), without.get(x, y));
            }
        }
    }

    #[test]
    fn newline_resets_x_and_drops_one_row() {
        let mut surface = white_surface();
        let (cx, cy) = draw_string(&mut surface, "ab\ncd", 10, 0, Color::BLACK, 2);
        assert_eq!(cx, 10 + 2 * 16);
        assert_eq!(cy, 16);
    }

    #[test]
    fn zero_or_negative_scale_is_a_no_op() {
        let mut surface = white_surface();
        assert_eq!(draw_string(&mut surface, "abc", 10, 10, Color::BLACK, 0), (10, 10));
        assert_eq!(draw_string(&mut surface, "abc", 10, 10, Color::BLACK, -3), (10, 10));
        assert_eq!(surface.count_pixels(Color::BLACK), 0);
    }

    #[test]
    fn empty_string_moves_nothing() {
        let mut surface = white_surface();
        assert_eq!(draw_string(&mut surface, "", 5, 7, Color::BLACK, 1), (5, 7));
        assert_eq!(surface.count_pixels(Color::BLACK), 0);
    }

    #[test]
    fn glyph_pixels_match_the_bitmap() {
        let mut surface = white_surface();
        // '1' row 0 is 0x18: bits 4 and 3 set, columns 3 and 4.
        draw_glyph(&mut surface, '1', 0, 0, Color::BLACK, 1);
        assert_eq!(surface.get(3, 0), Some(Color::BLACK));
        assert_eq!(surface.get(4, 0), Some(Color::BLACK));
        assert_eq!(surface.get(2, 0), Some(Color::WHITE));
        assert_eq!(surface.get(5, 0), Some(Color::WHITE));
    }

    #[test]
    fn scale_grows_blocks_not_just_spacing() {
        let mut surface = white_surface();
        draw_glyph(&mut surface, '1', 0, 0, Color::BLACK, 3);
        // The column-3 bit becomes a 3x3 block at (9..12, 0..3).
        for y in 0..3 {
            for x in 9..12 {
                assert_eq!(surface.get(x, y), Some(Color::BLACK), "missing at {x},{y}");
            }
        }
        assert_eq!(surface.get(8, 0), Some(Color::WHITE));
    }

    #[test]
    fn glyphs_clip_at_the_surface_edge() {
        let mut surface = Surface::new(8, 8, Color::WHITE);
        // Half the glyph hangs off the right edge; no panic, left half lands.
        draw_glyph(&mut surface, '8', 4, 0, Color::BLACK, 1);
        assert!(surface.count_pixels(Color::BLACK) > 0);
        // And fully off-surface paints nothing.
        let mut far = Surface::new(8, 8, Color::WHITE);
        draw_glyph(&mut far, '8', 100, 100, Color::BLACK, 1);
        assert_eq!(far.count_pixels(Color::BLACK), 0);
    }
}
