//! Backend-agnostic rendering for the spritemark benchmark.
//!
//! The simulation exposes state; this crate turns it into draw calls.
//! Everything funnels through one narrow trait ([`RenderBackend`]), so
//! the frame logic is written once and a concrete windowing target
//! only supplies surface, texture, quad, and present primitives.
//! A software [`HeadlessBackend`] ships here for tests and benches.
//!
//! Per frame, [`FrameRunner`] advances the world, emits one
//! [`SpriteQuad`] per active entity, and composes the dirty-gated
//! [`OverlayCache`] on top.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod backend;
pub mod descriptor;
pub mod frame;
pub mod headless;
pub mod overlay;

pub use backend::{BackendError, RenderBackend};
pub use descriptor::{sprite_quads, SpriteQuad};
pub use frame::{FrameMetrics, FrameRunner};
pub use headless::HeadlessBackend;
pub use overlay::{OverlayCache, OVERLAY_H, OVERLAY_W};
