//! Core types for the spritemark sprite benchmark.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary used throughout the spritemark workspace: fixed-point
//! numerics, pixel geometry, ids, logical commands, and the declarative
//! input binding table.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod fixed;
pub mod geom;
pub mod id;
pub mod input;

pub use command::{Action, Command, CommandBatch};
pub use fixed::Fixed;
pub use geom::{Color, Rect};
pub use id::{GamepadId, TextureId};
pub use input::{pad_attached, pad_removed, Bindings, InputCode, Key, PadButton};
