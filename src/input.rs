//! Input events delivered by the UI shell.
//!
//! Positions are in display coordinates, i.e. relative to the window the
//! shell draws into. The session converts them to image coordinates.

use boxtext_geom::Point;
use serde::{Deserialize, Serialize};

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Keys the editor can bind actions to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Key0,
    Key1,
    Key2,
    Key3,
    Key4,
    Key5,
    Key6,
    Key7,
    Key8,
    Key9,
    /// Main keyboard enter key
    Enter,
    /// Keypad enter / carriage return
    Return,
    Delete,
    Backspace,
    Escape,
    Space,
    Tab,
}

/// A single event from the shell's event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerDown { position: Point, button: MouseButton },
    PointerMove { position: Point },
    PointerUp { position: Point, button: MouseButton },
    KeyPress { key: KeyCode },
}
