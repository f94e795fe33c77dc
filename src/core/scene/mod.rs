//=========================================================================
// Scene System
//=========================================================================
//
// Animated scenes and the manager that switches between them.
//
// Architecture:
//   SceneManager
//     ├─ scenes: Vec<Box<dyn Scene>>   (registration order = cycle order)
//     └─ active: usize
//
// Flow (per frame):
//   handle_action() → update(frame) → draw(painter, frame)
//
//=========================================================================

//=== Module Declarations =================================================

pub mod orbit;
mod orrery;
mod scene_manager;
mod showcase;

//=== Public API ==========================================================

pub use orbit::{Body, BodyState, OrbitalSystem};
pub use orrery::OrreryScene;
pub use scene_manager::SceneManager;
pub use showcase::ShowcaseScene;

//=== External Dependencies ===============================================

use std::path::Path;

use glam::Vec2;
use log::warn;

//=== Internal Dependencies ===============================================

use crate::core::input::DemoAction;
use crate::render::{ImageHandle, Painter, Viewport};

//=== FrameContext ========================================================

/// Everything a scene may read while updating or drawing one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    pub viewport: Viewport,

    /// Scene time in seconds (stops while paused).
    pub time: f64,

    /// Last known cursor position in logical pixels, `None` until the
    /// cursor first enters the window.
    pub cursor: Option<Vec2>,
}

impl FrameContext {
    pub fn new(viewport: Viewport, time: f64) -> Self {
        Self { viewport, time, cursor: None }
    }
}

//=== Scene Trait =========================================================

/// A drawable, animated scene.
///
/// Only `name()` and `draw()` are required. Lifecycle hooks have default
/// empty implementations.
pub trait Scene {
    /// Unique name, used for `--scene` and logging.
    fn name(&self) -> &str;

    /// Loads images and other painter resources. Called once, before the
    /// first frame.
    fn load(&mut self, _painter: &mut dyn Painter, _assets: &Path) {}

    /// Called when the scene becomes active.
    fn on_enter(&mut self) {}

    /// Called when another scene takes over.
    fn on_exit(&mut self) {}

    fn update(&mut self, _frame: &FrameContext) {}

    fn draw(&mut self, painter: &mut dyn Painter, frame: &FrameContext);

    /// Scene-local action. Returns `true` when consumed.
    fn handle_action(&mut self, _action: DemoAction) -> bool {
        false
    }
}

//=== Helpers =============================================================

/// Loads an image relative to `assets`, logging and returning `None` on
/// failure.
pub(crate) fn load_image(
    painter: &mut dyn Painter,
    assets: &Path,
    path: &Path,
) -> Option<ImageHandle> {
    let full = assets.join(path);
    match painter.load_image(&full) {
        Ok(image) => Some(image),
        Err(e) => {
            warn!(target: "scene", "{}, skipping", e);
            None
        }
    }
}
