//! Declarative input binding table.
//!
//! Drivers translate raw device events into [`InputCode`]s and resolve
//! them here instead of branching on scancodes inline. The table is an
//! insertion-ordered map so diagnostics and help text list bindings in
//! the order they were declared.
//!
//! Hotplug is handled by two small helpers: [`pad_attached`] adopts a
//! newly seen gamepad and [`pad_removed`] releases the active one only
//! when the departing id actually matches it.

use indexmap::IndexMap;

use crate::command::{Action, Command};
use crate::id::GamepadId;

/// Keyboard keys the reference table binds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// The escape key.
    Escape,
    /// Left cursor key.
    Left,
    /// Right cursor key.
    Right,
    /// Up cursor key.
    Up,
    /// Down cursor key.
    Down,
    /// The `-` key on the main row.
    Minus,
    /// The `=` key on the main row.
    Equals,
}

/// Gamepad buttons the reference table binds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PadButton {
    /// D-pad left.
    DpadLeft,
    /// D-pad right.
    DpadRight,
    /// D-pad up.
    DpadUp,
    /// D-pad down.
    DpadDown,
    /// East face button (B on an Xbox layout).
    East,
}

/// A device-independent input event code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputCode {
    /// A keyboard key press.
    Key(Key),
    /// A gamepad button press.
    Pad(PadButton),
}

/// Maps input codes to driver actions.
///
/// Later bindings for the same code replace earlier ones, so callers can
/// start from [`Bindings::reference`] and override individual entries.
///
/// # Example
///
/// ```rust
/// use spritemark_core::{Action, Bindings, Command, InputCode, Key};
///
/// let bindings = Bindings::reference(100);
/// assert_eq!(
///     bindings.lookup(InputCode::Key(Key::Right)),
///     Some(Action::Command(Command::AdjustPopulation(100)))
/// );
/// assert_eq!(bindings.lookup(InputCode::Key(Key::Escape)), Some(Action::Quit));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Bindings {
    table: IndexMap<InputCode, Action>,
}

impl Bindings {
    /// Creates an empty table. Every lookup misses until codes are bound.
    pub fn empty() -> Self {
        Self {
            table: IndexMap::new(),
        }
    }

    /// Creates the reference table used by the stock benchmark driver.
    ///
    /// `population_step` is the entity count added or removed per press.
    /// Keyboard and d-pad mirror each other; escape and the east face
    /// button both quit.
    pub fn reference(population_step: i32) -> Self {
        let mut bindings = Self::empty();
        bindings.bind(InputCode::Key(Key::Escape), Action::Quit);
        bindings.bind(
            InputCode::Key(Key::Right),
            Action::Command(Command::AdjustPopulation(population_step)),
        );
        bindings.bind(
            InputCode::Key(Key::Equals),
            Action::Command(Command::AdjustPopulation(population_step)),
        );
        bindings.bind(
            InputCode::Key(Key::Left),
            Action::Command(Command::AdjustPopulation(-population_step)),
        );
        bindings.bind(
            InputCode::Key(Key::Minus),
            Action::Command(Command::AdjustPopulation(-population_step)),
        );
        bindings.bind(
            InputCode::Key(Key::Up),
            Action::Command(Command::ToggleMovement),
        );
        bindings.bind(
            InputCode::Key(Key::Down),
            Action::Command(Command::ToggleRotation),
        );
        bindings.bind(
            InputCode::Pad(PadButton::DpadRight),
            Action::Command(Command::AdjustPopulation(population_step)),
        );
        bindings.bind(
            InputCode::Pad(PadButton::DpadLeft),
            Action::Command(Command::AdjustPopulation(-population_step)),
        );
        bindings.bind(
            InputCode::Pad(PadButton::DpadUp),
            Action::Command(Command::ToggleMovement),
        );
        bindings.bind(
            InputCode::Pad(PadButton::DpadDown),
            Action::Command(Command::ToggleRotation),
        );
        bindings.bind(InputCode::Pad(PadButton::East), Action::Quit);
        bindings
    }

    /// Binds `code` to `action`, replacing any existing binding.
    pub fn bind(&mut self, code: InputCode, action: Action) {
        self.table.insert(code, action);
    }

    /// Resolves one input code. Unbound codes return `None` and should
    /// be ignored by the driver.
    pub fn lookup(&self, code: InputCode) -> Option<Action> {
        self.table.get(&code).copied()
    }

    /// Number of bound codes.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// `true` when no codes are bound.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Iterates bindings in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (InputCode, Action)> + '_ {
        self.table.iter().map(|(code, action)| (*code, *action))
    }
}

/// Command for a newly attached gamepad: adopt it as the active pad.
///
/// The stock driver adopts whichever pad attached most recently.
pub fn pad_attached(id: GamepadId) -> Command {
    Command::SetGamepad(Some(id))
}

/// Command for a detached gamepad, if any state change is needed.
///
/// Returns `Some` only when `removed` is the currently active pad;
/// unplugging an inactive pad is a no-op.
pub fn pad_removed(current: Option<GamepadId>, removed: GamepadId) -> Option<Command> {
    (current == Some(removed)).then_some(Command::SetGamepad(None))
}
