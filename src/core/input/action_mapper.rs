//=========================================================================
// Action Mapper
//=========================================================================
//
// Maps raw input events to demo actions based on configured bindings.
//
// Architecture:
//   (key/button, modifiers) → HashMap → DemoAction
//   key (any modifiers)     → HashMap → DemoAction   (fallback)
//
// Only press events resolve; releases and cursor motion never do.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::{
    action::DemoAction,
    event::{InputEvent, KeyCode, Modifiers, MouseButton},
};

//=== ActionMapper ========================================================

/// Maps input events to actions via `(key/button, modifiers)` lookups.
pub(crate) struct ActionMapper {
    key_bindings: HashMap<(KeyCode, Modifiers), DemoAction>,
    /// Keys that resolve whatever modifiers are held.
    loose_key_bindings: HashMap<KeyCode, DemoAction>,
    mouse_bindings: HashMap<(MouseButton, Modifiers), DemoAction>,
}

impl ActionMapper {
    /// Creates a mapper with no bindings.
    pub(crate) fn new() -> Self {
        Self {
            key_bindings: HashMap::new(),
            loose_key_bindings: HashMap::new(),
            mouse_bindings: HashMap::new(),
        }
    }

    /// Creates a mapper with the demo's default keyboard layout.
    ///
    /// ```text
    /// Q, Escape        → Quit         (any modifiers)
    /// Space, P         → TogglePause  (any modifiers)
    /// ArrowUp, =       → Faster
    /// ArrowDown, -     → Slower
    /// R, 0             → ResetRate
    /// Tab              → NextScene
    /// O                → ToggleOrbits
    /// ```
    pub(crate) fn with_default_bindings() -> Self {
        let mut mapper = Self::new();

        mapper.bind_key_any_mods(KeyCode::KeyQ, DemoAction::Quit);
        mapper.bind_key_any_mods(KeyCode::Escape, DemoAction::Quit);

        mapper.bind_key_any_mods(KeyCode::Space, DemoAction::TogglePause);
        mapper.bind_key_any_mods(KeyCode::KeyP, DemoAction::TogglePause);

        mapper.bind_key(KeyCode::ArrowUp, DemoAction::Faster);
        mapper.bind_key(KeyCode::Equal, DemoAction::Faster);
        // `+` is Shift+= on most layouts
        mapper.bind_key_with_mods(KeyCode::Equal, Modifiers::SHIFT, DemoAction::Faster);

        mapper.bind_key(KeyCode::ArrowDown, DemoAction::Slower);
        mapper.bind_key(KeyCode::Minus, DemoAction::Slower);

        mapper.bind_key(KeyCode::KeyR, DemoAction::ResetRate);
        mapper.bind_key(KeyCode::Digit0, DemoAction::ResetRate);

        mapper.bind_key(KeyCode::Tab, DemoAction::NextScene);
        mapper.bind_key(KeyCode::KeyO, DemoAction::ToggleOrbits);

        mapper
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to an action (no modifiers).
    pub(crate) fn bind_key(&mut self, key: KeyCode, action: DemoAction) {
        self.bind_key_with_mods(key, Modifiers::NONE, action);
    }

    /// Binds a key with modifiers to an action (exact match required).
    pub(crate) fn bind_key_with_mods(
        &mut self,
        key: KeyCode,
        modifiers: Modifiers,
        action: DemoAction,
    ) {
        self.key_bindings.insert((key, modifiers), action);
    }

    /// Binds a key that resolves under any modifier combination.
    ///
    /// Exact `(key, modifiers)` bindings take precedence.
    pub(crate) fn bind_key_any_mods(&mut self, key: KeyCode, action: DemoAction) {
        self.loose_key_bindings.insert(key, action);
    }

    /// Binds a mouse button to an action (no modifiers).
    pub(crate) fn bind_mouse(&mut self, button: MouseButton, action: DemoAction) {
        self.mouse_bindings.insert((button, Modifiers::NONE), action);
    }

    #[cfg(test)]
    pub(crate) fn binding_count(&self) -> usize {
        self.key_bindings.len() + self.loose_key_bindings.len() + self.mouse_bindings.len()
    }

    //--- Event Mapping ----------------------------------------------------

    /// Maps an input event to an action.
    pub(crate) fn map_event(&self, event: &InputEvent) -> Option<DemoAction> {
        match event {
            InputEvent::KeyDown { key, modifiers } => self.map_key(*key, *modifiers),
            InputEvent::MouseButtonDown { button, modifiers } => {
                self.mouse_bindings.get(&(*button, *modifiers)).copied()
            }
            _ => None,
        }
    }

    fn map_key(&self, key: KeyCode, modifiers: Modifiers) -> Option<DemoAction> {
        self.key_bindings
            .get(&(key, modifiers))
            .or_else(|| self.loose_key_bindings.get(&key))
            .copied()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helper Functions --------------------------------------------

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    fn key_down_with_mods(key: KeyCode, modifiers: Modifiers) -> InputEvent {
        InputEvent::KeyDown { key, modifiers }
    }

    //=====================================================================
    // Basic Binding Tests
    //=====================================================================

    #[test]
    fn bind_and_map_simple_key() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::Space, DemoAction::TogglePause);

        assert_eq!(mapper.map_event(&key_down(KeyCode::Space)), Some(DemoAction::TogglePause));
    }

    #[test]
    fn unbound_key_maps_to_none() {
        let mapper = ActionMapper::new();
        assert_eq!(mapper.map_event(&key_down(KeyCode::Space)), None);
    }

    #[test]
    fn key_release_never_maps() {
        let mapper = ActionMapper::with_default_bindings();
        let release = InputEvent::KeyUp { key: KeyCode::KeyQ, modifiers: Modifiers::NONE };
        assert_eq!(mapper.map_event(&release), None);
    }

    #[test]
    fn mouse_binding_maps_press() {
        let mut mapper = ActionMapper::new();
        mapper.bind_mouse(MouseButton::Right, DemoAction::NextScene);

        let press = InputEvent::MouseButtonDown {
            button: MouseButton::Right,
            modifiers: Modifiers::NONE,
        };
        assert_eq!(mapper.map_event(&press), Some(DemoAction::NextScene));
    }

    //=====================================================================
    // Modifier Tests
    //=====================================================================

    #[test]
    fn modifiers_must_match_exactly() {
        let mapper = ActionMapper::with_default_bindings();

        let ctrl_r = key_down_with_mods(KeyCode::KeyR, Modifiers::CTRL);
        assert_eq!(mapper.map_event(&ctrl_r), None);
        assert_eq!(mapper.map_event(&key_down(KeyCode::KeyR)), Some(DemoAction::ResetRate));
    }

    #[test]
    fn quit_and_pause_ignore_modifiers() {
        let mapper = ActionMapper::with_default_bindings();

        for mods in [Modifiers::SHIFT, Modifiers::CTRL, Modifiers::ALT] {
            let q = key_down_with_mods(KeyCode::KeyQ, mods);
            assert_eq!(mapper.map_event(&q), Some(DemoAction::Quit), "{}", mods);

            let space = key_down_with_mods(KeyCode::Space, mods);
            assert_eq!(mapper.map_event(&space), Some(DemoAction::TogglePause), "{}", mods);
        }
    }

    #[test]
    fn exact_binding_beats_any_modifier_binding() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key_any_mods(KeyCode::KeyP, DemoAction::TogglePause);
        mapper.bind_key_with_mods(KeyCode::KeyP, Modifiers::CTRL, DemoAction::NextScene);

        let ctrl_p = key_down_with_mods(KeyCode::KeyP, Modifiers::CTRL);
        let shift_p = key_down_with_mods(KeyCode::KeyP, Modifiers::SHIFT);
        assert_eq!(mapper.map_event(&ctrl_p), Some(DemoAction::NextScene));
        assert_eq!(mapper.map_event(&shift_p), Some(DemoAction::TogglePause));
    }

    #[test]
    fn shifted_equal_is_faster() {
        let mapper = ActionMapper::with_default_bindings();
        let plus = key_down_with_mods(KeyCode::Equal, Modifiers::SHIFT);
        assert_eq!(mapper.map_event(&plus), Some(DemoAction::Faster));
    }

    //=====================================================================
    // Default Layout Tests
    //=====================================================================

    #[test]
    fn default_layout() {
        let mapper = ActionMapper::with_default_bindings();
        let expect = [
            (KeyCode::KeyQ, DemoAction::Quit),
            (KeyCode::Escape, DemoAction::Quit),
            (KeyCode::Space, DemoAction::TogglePause),
            (KeyCode::KeyP, DemoAction::TogglePause),
            (KeyCode::ArrowUp, DemoAction::Faster),
            (KeyCode::ArrowDown, DemoAction::Slower),
            (KeyCode::Minus, DemoAction::Slower),
            (KeyCode::KeyR, DemoAction::ResetRate),
            (KeyCode::Digit0, DemoAction::ResetRate),
            (KeyCode::Tab, DemoAction::NextScene),
            (KeyCode::KeyO, DemoAction::ToggleOrbits),
        ];

        for (key, action) in expect {
            assert_eq!(mapper.map_event(&key_down(key)), Some(action), "{:?}", key);
        }
        assert_eq!(mapper.binding_count(), 13);
    }
}
