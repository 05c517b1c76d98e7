//! Strongly-typed identifiers.

use std::fmt;

/// Identifies an attached game controller.
///
/// Carried by device attach/detach events so a removal can be matched
/// against the pad that is actually in use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GamepadId(pub u32);

impl fmt::Display for GamepadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for GamepadId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Handle to a texture owned by a render backend.
///
/// Returned by `upload_texture` and consumed by `draw_quad`; the backend
/// decides what it maps to internally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u32);

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TextureId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
