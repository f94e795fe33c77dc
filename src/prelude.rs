//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use orrery::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder};

// Configuration
pub use crate::config::{Arguments, Config};

// Input
pub use crate::core::input::{DemoAction, KeyCode, Modifiers, MouseButton};

// Animation and scenes
pub use crate::core::clock::AnimationClock;
pub use crate::core::scene::{Body, FrameContext, OrbitalSystem, Scene};

// Drawing
pub use crate::render::{CircleStyle, Painter, Rgba, Viewport};
