//=========================================================================
// Demo Actions
//=========================================================================
//
// High-level commands resolved from raw input by the ActionMapper.
//
// The core interprets the global actions (quit, pause, rate, scene
// cycling); anything else is forwarded to the active scene.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== DemoAction ==========================================================

/// Command triggered by a bound key or mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoAction {
    /// Leave the render loop.
    Quit,

    /// Switch between running and paused.
    TogglePause,

    /// Multiply the animation rate by the configured factor.
    Faster,

    /// Divide the animation rate by the configured factor.
    Slower,

    /// Restore the configured starting rate.
    ResetRate,

    /// Activate the next registered scene.
    NextScene,

    /// Show or hide the orbit trails of the orrery scene.
    ToggleOrbits,
}

impl DemoAction {
    /// Returns `true` for actions the core handles itself.
    ///
    /// Scene-level actions are forwarded to the active scene.
    pub fn is_global(self) -> bool {
        !matches!(self, Self::ToggleOrbits)
    }
}

impl fmt::Display for DemoAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Quit => "quit",
            Self::TogglePause => "toggle-pause",
            Self::Faster => "faster",
            Self::Slower => "slower",
            Self::ResetRate => "reset-rate",
            Self::NextScene => "next-scene",
            Self::ToggleOrbits => "toggle-orbits",
        };
        f.write_str(name)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn scene_actions_are_not_global() {
        assert!(!DemoAction::ToggleOrbits.is_global());
        assert!(DemoAction::Quit.is_global());
        assert!(DemoAction::TogglePause.is_global());
        assert!(DemoAction::NextScene.is_global());
    }

    #[test]
    fn action_is_hashable() {
        let mut set = HashSet::new();
        set.insert(DemoAction::Faster);
        set.insert(DemoAction::Faster);
        set.insert(DemoAction::Slower);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display_uses_kebab_case() {
        assert_eq!(DemoAction::TogglePause.to_string(), "toggle-pause");
        assert_eq!(DemoAction::ResetRate.to_string(), "reset-rate");
    }
}
