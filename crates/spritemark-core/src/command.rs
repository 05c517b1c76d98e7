//! Logical commands and driver actions.
//!
//! Raw device events are translated outside the core (see
//! [`input`](crate::input)); the simulation consumes only these logical
//! [`Command`]s. Application order within a frame is the batch order.

use smallvec::SmallVec;

use crate::id::GamepadId;

/// A logical command applied to simulation state at the start of a frame.
///
/// Commands never fail: out-of-range population deltas clamp silently and
/// toggles always apply. This keeps the per-frame path free of error
/// handling by construction.
///
/// # Example
///
/// ```rust
/// use spritemark_core::{Command, CommandBatch, GamepadId};
///
/// let mut batch = CommandBatch::new();
/// batch.push(Command::AdjustPopulation(100));
/// batch.push(Command::SetGamepad(Some(GamepadId(0))));
/// assert_eq!(batch.len(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Move the active-population boundary by a signed entity count.
    ///
    /// The result is clamped to `[0, capacity]`; a request past either
    /// end saturates instead of failing.
    AdjustPopulation(i32),
    /// Flip whether positions advance. Animation keeps running either way.
    ToggleMovement,
    /// Flip whether entities are drawn rotated by the configured angle.
    ToggleRotation,
    /// Attach (`Some`) or detach (`None`) the active gamepad.
    SetGamepad(Option<GamepadId>),
}

/// What the driver should do with one raw input event.
///
/// `Quit` belongs to the driver loop, not the simulation, so the binding
/// table distinguishes it from forwarded [`Command`]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Forward a logical command to the simulation.
    Command(Command),
    /// Stop the driver loop.
    Quit,
}

/// Commands collected for one frame.
///
/// Inline capacity covers the typical few-events-per-frame case without
/// touching the heap; a burst spills transparently.
pub type CommandBatch = SmallVec<[Command; 4]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_stays_inline_for_a_typical_frame() {
        let mut batch = CommandBatch::new();
        batch.push(Command::AdjustPopulation(100));
        batch.push(Command::ToggleMovement);
        batch.push(Command::ToggleRotation);
        batch.push(Command::SetGamepad(None));
        assert_eq!(batch.len(), 4);
        assert!(!batch.spilled());
    }

    #[test]
    fn commands_compare_by_payload() {
        assert_eq!(Command::AdjustPopulation(5), Command::AdjustPopulation(5));
        assert_ne!(Command::AdjustPopulation(5), Command::AdjustPopulation(-5));
        assert_ne!(
            Command::SetGamepad(Some(GamepadId(1))),
            Command::SetGamepad(None)
        );
    }
}
