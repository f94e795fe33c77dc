//=========================================================================
// Input Event Types
//
// Portable representation of the keyboard and mouse input the demo
// reacts to. The platform layer converts winit events into these types
// before they cross the bridge into the core.
//
// Event Flow:
// ```text
// winit WindowEvent
//         ↓
//    InputProcessor (platform)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker + ActionMapper
//         ↓
//    DemoAction (pause, rate, quit, ...)
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;
use std::hash::{Hash, Hasher};

//=== MouseButton =========================================================

/// Physical mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,

    /// Side, thumb and any other non-standard button.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Names the physical key location, not the produced character: `KeyQ`
/// is the same key on QWERTY and AZERTY layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Punctuation ------------------------------------------------------

    /// `=` / `+` key on the number row.
    Equal,

    /// `-` / `_` key on the number row.
    Minus,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Key reported by the platform that has no mapping here.
    Unidentified,
}

impl KeyCode {
    /// Returns the character printed on the key for an unshifted US layout.
    ///
    /// Used for key logging only; returns `None` for non-printing keys.
    pub fn label(self) -> Option<char> {
        use KeyCode::*;
        let c = match self {
            Digit0 => '0', Digit1 => '1', Digit2 => '2', Digit3 => '3', Digit4 => '4',
            Digit5 => '5', Digit6 => '6', Digit7 => '7', Digit8 => '8', Digit9 => '9',
            KeyA => 'A', KeyB => 'B', KeyC => 'C', KeyD => 'D', KeyE => 'E',
            KeyF => 'F', KeyG => 'G', KeyH => 'H', KeyI => 'I', KeyJ => 'J',
            KeyK => 'K', KeyL => 'L', KeyM => 'M', KeyN => 'N', KeyO => 'O',
            KeyP => 'P', KeyQ => 'Q', KeyR => 'R', KeyS => 'S', KeyT => 'T',
            KeyU => 'U', KeyV => 'V', KeyW => 'W', KeyX => 'X', KeyY => 'Y',
            KeyZ => 'Z',
            Equal => '=',
            Minus => '-',
            Space => ' ',
            _ => return None,
        };
        Some(c)
    }
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// # Equality & Hashing Semantics
///
/// Events compare by type, key/button and modifiers. `MouseMoved` events
/// are equal regardless of coordinates so the input buffer can coalesce
/// them (last position wins).
///
/// ```text
/// KeyDown{Q, NONE} == KeyDown{Q, NONE}       ✓
/// KeyDown{Q, NONE} == KeyDown{Q, CTRL}       ✗
/// MouseMoved{...}  == MouseMoved{...}        ✓
/// ```
#[derive(Debug, Clone)]
pub enum InputEvent {
    KeyDown {
        key: KeyCode,
        modifiers: Modifiers,
    },

    KeyUp {
        key: KeyCode,
        modifiers: Modifiers,
    },

    MouseButtonDown {
        button: MouseButton,
        modifiers: Modifiers,
    },

    MouseButtonUp {
        button: MouseButton,
        modifiers: Modifiers,
    },

    /// Cursor moved, in logical pixels with a top-left origin.
    MouseMoved { x: f32, y: f32 },

    /// Event the input system does not understand; ignored.
    Unidentified,
}

//--- Trait Implementations -----------------------------------------------

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (KeyDown { key: a, modifiers: ma }, KeyDown { key: b, modifiers: mb })
            | (KeyUp { key: a, modifiers: ma }, KeyUp { key: b, modifiers: mb }) => {
                a == b && ma == mb
            }
            (
                MouseButtonDown { button: a, modifiers: ma },
                MouseButtonDown { button: b, modifiers: mb },
            )
            | (
                MouseButtonUp { button: a, modifiers: ma },
                MouseButtonUp { button: b, modifiers: mb },
            ) => a == b && ma == mb,
            // coordinates ignored
            (MouseMoved { .. }, MouseMoved { .. }) => true,
            (Unidentified, Unidentified) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

/// Hashes discriminant + key/button + modifiers, never coordinates, so
/// that `a == b` implies `hash(a) == hash(b)`.
impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Self::KeyDown { key, modifiers } | Self::KeyUp { key, modifiers } => {
                key.hash(state);
                modifiers.hash(state);
            }
            Self::MouseButtonDown { button, modifiers }
            | Self::MouseButtonUp { button, modifiers } => {
                button.hash(state);
                modifiers.hash(state);
            }
            _ => {}
        }
    }
}

//=== Modifiers ===========================================================

/// Modifier key state (Shift, Ctrl, Alt).
///
/// Bindings match modifiers exactly: a binding on `Q` does not fire for
/// `Ctrl+Q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self { shift: false, ctrl: false, alt: false };
    pub const SHIFT: Self = Self { shift: true, ctrl: false, alt: false };
    pub const CTRL: Self = Self { shift: false, ctrl: true, alt: false };
    pub const ALT: Self = Self { shift: false, ctrl: false, alt: true };

    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(3);
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.alt {
            parts.push("Alt");
        }
        if self.shift {
            parts.push("Shift");
        }
        if parts.is_empty() {
            f.write_str("-")
        } else {
            f.write_str(&parts.join("+"))
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    //--- Test Helpers -----------------------------------------------------

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    //=====================================================================
    // Equality Tests
    //=====================================================================

    #[test]
    fn equality_same_key_same_modifiers() {
        assert_eq!(key_down(KeyCode::KeyQ), key_down(KeyCode::KeyQ));
    }

    #[test]
    fn equality_mousemoved_ignores_coordinates() {
        let a = InputEvent::MouseMoved { x: 10.0, y: 10.0 };
        let b = InputEvent::MouseMoved { x: 200.0, y: 300.0 };
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn equality_key_down_vs_up() {
        let up = InputEvent::KeyUp { key: KeyCode::KeyQ, modifiers: Modifiers::NONE };
        assert_ne!(key_down(KeyCode::KeyQ), up);
    }

    #[test]
    fn equality_respects_modifiers() {
        let plain = key_down(KeyCode::KeyQ);
        let ctrl = InputEvent::KeyDown { key: KeyCode::KeyQ, modifiers: Modifiers::CTRL };
        assert_ne!(plain, ctrl);
        assert_ne!(hash_of(&plain), hash_of(&ctrl));
    }

    #[test]
    fn equality_key_vs_mouse_family() {
        let mouse = InputEvent::MouseButtonDown {
            button: MouseButton::Left,
            modifiers: Modifiers::NONE,
        };
        assert_ne!(key_down(KeyCode::KeyA), mouse);
    }

    //=====================================================================
    // KeyCode / Modifiers Tests
    //=====================================================================

    #[test]
    fn key_labels() {
        assert_eq!(KeyCode::KeyQ.label(), Some('Q'));
        assert_eq!(KeyCode::Digit0.label(), Some('0'));
        assert_eq!(KeyCode::Equal.label(), Some('='));
        assert_eq!(KeyCode::Escape.label(), None);
    }

    #[test]
    fn modifiers_display() {
        assert_eq!(Modifiers::NONE.to_string(), "-");
        let all = Modifiers { shift: true, ctrl: true, alt: true };
        assert_eq!(all.to_string(), "Ctrl+Alt+Shift");
    }

    #[test]
    fn modifiers_default_is_none() {
        assert!(Modifiers::default().is_empty());
        assert!(!Modifiers::SHIFT.is_empty());
    }
}
