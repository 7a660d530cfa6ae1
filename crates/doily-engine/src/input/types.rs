use std::fmt;

/// Keyboard key identifier.
///
/// Letters and digits are reported as lower-case [`Key::Char`]. Keys without
/// a variant arrive as `Key::Unknown` and are ignored by the UI.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Delete,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Shift,
    Control,
    Alt,
    Meta,

    /// `a`–`z`, `0`–`9`.
    Char(char),

    Unknown,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on Linux/Windows, Cmd on macOS.
    #[inline]
    pub fn command(&self) -> bool {
        if cfg!(target_os = "macos") { self.meta } else { self.ctrl }
    }
}

/// Mouse wheel delta.
///
/// `Line` is notched-wheel input; `Pixel` comes from touchpads.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { x: f32, y: f32 },
    Pixel { x: f32, y: f32 },
}

impl MouseWheelDelta {
    /// Logical pixels scrolled per wheel line.
    pub const LINE_HEIGHT: f32 = 40.0;

    /// Vertical delta in logical pixels, positive when scrolling up.
    pub fn pixels_y(self) -> f32 {
        match self {
            MouseWheelDelta::Line { y, .. } => y * Self::LINE_HEIGHT,
            MouseWheelDelta::Pixel { y, .. } => y,
        }
    }
}

/// Pointer button event in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub x: f32,
    pub y: f32,
    pub modifiers: Modifiers,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),

    Key {
        key: Key,
        state: KeyState,
        modifiers: Modifiers,
        repeat: bool,
    },

    PointerMoved { x: f32, y: f32 },
    PointerButton(PointerButtonEvent),

    MouseWheel {
        delta: MouseWheelDelta,
        modifiers: Modifiers,
    },

    /// Pointer left the window surface.
    PointerLeft,

    Focused(bool),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{c}"),
            other => write!(f, "{other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn line_delta_scaled() { assert_eq!(MouseWheelDelta::Line { x: 0.0, y: -2.0 }.pixels_y(), -80.0); }
    #[test] fn pixel_delta_passthrough() { assert_eq!(MouseWheelDelta::Pixel { x: 0.0, y: 7.5 }.pixels_y(), 7.5); }
    #[test] fn char_key_displays_char() { assert_eq!(Key::Char('z').to_string(), "z"); }
}
