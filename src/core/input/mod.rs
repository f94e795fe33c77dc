//=========================================================================
// Input System
//
// Turns the per-frame input batches collected from the platform into
// persistent input state and an ordered list of demo actions.
//
// Architecture:
// ```text
//   Vec<Vec<InputEvent>> ──► StateTracker   (keys held, cursor)
//                       └──► ActionMapper   (bindings → DemoAction)
// ```
//
// Every key and mouse press is logged at debug level, mirroring the
// key/char/mouse callbacks of a windowing library.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod action;
pub(crate) mod action_mapper;
pub mod event;
pub mod state_tracker;

//=== Public API ==========================================================

pub use action::DemoAction;
pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};
pub use state_tracker::StateTracker;

//=== External Crates =====================================================

use log::{debug, trace};

//=== Internal Imports ====================================================

use action_mapper::ActionMapper;

//=== InputSystem =========================================================

/// Owns the input state and the action bindings.
pub struct InputSystem {
    state: StateTracker,
    mapper: ActionMapper,
    actions: Vec<DemoAction>,
}

impl InputSystem {
    /// Creates an input system with the default key layout.
    pub fn new() -> Self {
        Self {
            state: StateTracker::new(),
            mapper: ActionMapper::with_default_bindings(),
            actions: Vec::with_capacity(8),
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Digests this frame's batches in arrival order.
    ///
    /// Clears last frame's actions and deltas first. Actions are resolved
    /// per event, so two presses in one frame yield two actions.
    pub fn process_frame(&mut self, batches: &[Vec<InputEvent>]) {
        self.state.clear();
        self.actions.clear();

        for batch in batches {
            self.state.process_events(batch);

            for event in batch {
                log_event(event);
                if let Some(action) = self.mapper.map_event(event) {
                    debug!(target: "core::input", "Action: {}", action);
                    self.actions.push(action);
                }
            }
        }
    }

    //--- Query Methods ----------------------------------------------------

    /// Actions triggered during the last processed frame.
    pub fn actions(&self) -> &[DemoAction] {
        &self.actions
    }

    pub fn state(&self) -> &StateTracker {
        &self.state
    }

    /// Binds an extra key (no modifiers) on top of the default layout.
    pub fn bind_key(&mut self, key: KeyCode, action: DemoAction) {
        self.mapper.bind_key(key, action);
    }

    /// Binds an extra mouse button (no modifiers).
    pub fn bind_mouse(&mut self, button: MouseButton, action: DemoAction) {
        self.mapper.bind_mouse(button, action);
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

//--- Logging -------------------------------------------------------------

fn log_event(event: &InputEvent) {
    match event {
        InputEvent::KeyDown { key, modifiers } => {
            debug!(
                target: "core::input",
                "Key down: {:?} char={:?} mods={}",
                key,
                key.label(),
                modifiers
            );
        }
        InputEvent::MouseButtonDown { button, modifiers } => {
            debug!(target: "core::input", "Mouse down: {:?} mods={}", button, modifiers);
        }
        InputEvent::MouseButtonUp { button, modifiers } => {
            debug!(target: "core::input", "Mouse up: {:?} mods={}", button, modifiers);
        }
        InputEvent::MouseMoved { x, y } => {
            trace!(target: "core::input", "Cursor: ({}, {})", x, y);
        }
        InputEvent::KeyUp { .. } | InputEvent::Unidentified => {}
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key, modifiers: Modifiers::NONE }
    }

    #[test]
    fn actions_resolve_in_arrival_order() {
        let mut input = InputSystem::new();
        let batches = vec![
            vec![key_down(KeyCode::Space), key_up(KeyCode::Space)],
            vec![key_down(KeyCode::ArrowUp)],
        ];

        input.process_frame(&batches);

        assert_eq!(input.actions(), &[DemoAction::TogglePause, DemoAction::Faster]);
    }

    #[test]
    fn actions_are_cleared_between_frames() {
        let mut input = InputSystem::new();
        input.process_frame(&[vec![key_down(KeyCode::KeyQ)]]);
        assert_eq!(input.actions(), &[DemoAction::Quit]);

        input.process_frame(&[]);
        assert!(input.actions().is_empty());
    }

    #[test]
    fn cursor_reaches_state() {
        let mut input = InputSystem::new();
        input.process_frame(&[vec![InputEvent::MouseMoved { x: 3.0, y: 4.0 }]]);
        assert_eq!(input.state().cursor(), (3.0, 4.0));
    }

    #[test]
    fn extra_bindings_extend_defaults() {
        let mut input = InputSystem::new();
        input.bind_mouse(MouseButton::Left, DemoAction::TogglePause);

        let click = InputEvent::MouseButtonDown {
            button: MouseButton::Left,
            modifiers: Modifiers::NONE,
        };
        input.process_frame(&[vec![click, key_down(KeyCode::Escape)]]);

        assert_eq!(input.actions(), &[DemoAction::TogglePause, DemoAction::Quit]);
    }
}
