//! The narrow seam between the pipeline and a concrete renderer.
//!
//! Everything above the [`RenderBackend`] trait is target-independent,
//! so a new platform implements five operations and inherits the whole
//! pipeline instead of duplicating it.
//! [`HeadlessBackend`](crate::headless::HeadlessBackend) is the
//! in-memory implementation used by tests and benches.

use std::error::Error;
use std::fmt;

use spritemark_core::{Color, Rect, TextureId};

// ── BackendError ─────────────────────────────────────────────────

/// Errors surfaced by a [`RenderBackend`] implementation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendError {
    /// The output surface could not be created at the requested size.
    SurfaceCreation {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
    /// A draw or update referenced a texture that was never uploaded.
    UnknownTexture(TextureId),
    /// Uploaded pixel data does not match the declared dimensions.
    TextureSizeMismatch {
        /// Byte length implied by width, height, and RGBA8.
        expected: usize,
        /// Byte length actually supplied.
        actual: usize,
    },
    /// A failure specific to the underlying renderer.
    Renderer {
        /// Description reported by the renderer.
        reason: String,
    },
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceCreation { width, height } => {
                write!(f, "cannot create a {width}x{height} output surface")
            }
            Self::UnknownTexture(id) => write!(f, "unknown texture {id}"),
            Self::TextureSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "texture data is {actual} bytes, dimensions imply {expected}"
                )
            }
            Self::Renderer { reason } => write!(f, "renderer failure: {reason}"),
        }
    }
}

impl Error for BackendError {}

// ── RenderBackend ────────────────────────────────────────────────

/// Operations a concrete renderer must provide.
///
/// Textures are RGBA8, row-major, tightly packed. Coordinates are whole
/// pixels with the origin at the top left; destination rectangles may
/// overhang any screen edge and the backend clips them. All calls are
/// immediate; nothing is visible until [`present`](Self::present).
pub trait RenderBackend {
    /// Size (or resize) the output surface.
    fn create_surface(&mut self, width: u32, height: u32) -> Result<(), BackendError>;

    /// Register pixel data and return a handle for later draws.
    ///
    /// `pixels` must hold exactly `width * height * 4` bytes.
    fn upload_texture(
        &mut self,
        width: u32,
        height: u32,
        pixels: &[u8],
    ) -> Result<TextureId, BackendError>;

    /// Replace the pixel data of an already-uploaded texture.
    ///
    /// The new data must match the dimensions given at upload.
    fn update_texture(&mut self, texture: TextureId, pixels: &[u8]) -> Result<(), BackendError>;

    /// Fill the whole output surface with one color.
    fn clear(&mut self, color: Color);

    /// Draw a texture region onto a screen rectangle.
    ///
    /// `src` selects texels; `dst` is scaled to fit with the backend's
    /// own filtering. `rotation` is a clockwise angle in degrees about
    /// the center of `dst`, or `None` for an axis-aligned draw.
    fn draw_quad(
        &mut self,
        texture: TextureId,
        src: Rect,
        dst: Rect,
        rotation: Option<f32>,
    ) -> Result<(), BackendError>;

    /// Flip the finished frame to the output.
    fn present(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_their_payloads() {
        let err = BackendError::SurfaceCreation {
            width: 480,
            height: 272,
        };
        assert_eq!(err.to_string(), "cannot create a 480x272 output surface");

        let err = BackendError::UnknownTexture(TextureId(7));
        assert_eq!(err.to_string(), "unknown texture 7");

        let err = BackendError::TextureSizeMismatch {
            expected: 27_600,
            actual: 16,
        };
        assert_eq!(err.to_string(), "texture data is 16 bytes, dimensions imply 27600");

        let err = BackendError::Renderer {
            reason: "device lost".to_string(),
        };
        assert_eq!(err.to_string(), "renderer failure: device lost");
    }
}
