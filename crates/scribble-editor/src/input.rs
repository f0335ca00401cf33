//! Input abstraction layer.
//!
//! Normalizes mouse, touch, and stylus events into a unified `InputEvent`
//! enum consumed by the canvas controller.

/// A normalized input event from any pointing device or the keyboard.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start, pen contact).
    PointerDown {
        x: f32,
        y: f32,
        /// Pressure from 0.0 (none) to 1.0 (max).
        pressure: f32,
    },

    /// Pointer moved.
    PointerMove { x: f32, y: f32, pressure: f32 },

    /// Pointer released.
    PointerUp { x: f32, y: f32, pressure: f32 },

    /// Pointer left the canvas; ends the gesture like a release.
    PointerLeave { x: f32, y: f32, pressure: f32 },

    /// Key released.
    Key(KeyEvent),
}

/// A key event, identified by its physical `code` (e.g. `"KeyE"`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyEvent {
    pub code: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyEvent {
    /// A key with no modifiers held.
    pub fn plain(code: &str) -> Self {
        Self {
            code: code.to_string(),
            ..Self::default()
        }
    }
}

impl InputEvent {
    pub fn from_pointer_down(x: f32, y: f32, pressure: f32) -> Self {
        Self::PointerDown { x, y, pressure }
    }

    pub fn from_pointer_move(x: f32, y: f32, pressure: f32) -> Self {
        Self::PointerMove { x, y, pressure }
    }

    pub fn from_pointer_up(x: f32, y: f32, pressure: f32) -> Self {
        Self::PointerUp { x, y, pressure }
    }

    /// Extract position if this is a pointer event.
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            Self::PointerDown { x, y, .. }
            | Self::PointerMove { x, y, .. }
            | Self::PointerUp { x, y, .. }
            | Self::PointerLeave { x, y, .. } => Some((*x, *y)),
            Self::Key(_) => None,
        }
    }
}
