//! Embedded 8x8 bitmap font for spritemark diagnostics.
//!
//! Thirty-seven glyphs (digits, lowercase letters, space) baked into
//! the binary, plus a CPU rasterizer that paints them into a plain
//! RGBA8 [`Surface`]. The surface carries no backend ties, so the
//! render crate can upload it as a texture wherever the overlay ends
//! up on screen.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod glyphs;
pub mod raster;
pub mod surface;

pub use glyphs::{glyph, GLYPHS, GLYPH_COUNT, GLYPH_SIZE};
pub use raster::{draw_glyph, draw_string};
pub use surface::Surface;
