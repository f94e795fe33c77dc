//=========================================================================
// Scene Manager
//=========================================================================
//
// Manages scene registration, the active scene and lifecycle.
//
// Scenes are stored in registration order and addressed by name. Only
// the active scene is updated and drawn; inactive scenes keep their state
// between activations.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::Path;

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::{FrameContext, Scene};
use crate::core::input::DemoAction;
use crate::render::Painter;

//=== Scene Manager =======================================================

/// Owns every scene and switches between them.
#[derive(Default)]
pub struct SceneManager {
    scenes: Vec<Box<dyn Scene>>,
    active: usize,
}

impl SceneManager {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self { scenes: Vec::new(), active: 0 }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene. A scene with the same name is replaced in place.
    pub fn register<T>(&mut self, scene: T)
    where
        T: Scene + 'static,
    {
        let name = scene.name().to_owned();
        match self.index_of(&name) {
            Some(index) => {
                warn!(target: "scene", "Scene '{}' was already registered and has been replaced", name);
                self.scenes[index] = Box::new(scene);
            }
            None => {
                debug!(target: "scene", "Registered scene '{}'", name);
                self.scenes.push(Box::new(scene));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.scenes.iter().map(|s| s.name()).collect()
    }

    /// Name of the active scene, `None` when nothing is registered.
    pub fn active_name(&self) -> Option<&str> {
        self.scenes.get(self.active).map(|s| s.name())
    }

    //--- Switching --------------------------------------------------------

    /// Activates the named scene. Unknown names leave the active scene
    /// unchanged and return `false`.
    pub fn activate(&mut self, name: &str) -> bool {
        match self.index_of(name) {
            Some(index) => {
                self.switch_to(index);
                true
            }
            None => false,
        }
    }

    /// Activates the named scene, or the first registered one when the
    /// name is unknown.
    pub fn start(&mut self, name: &str) {
        if self.scenes.is_empty() {
            warn!(target: "scene", "No scenes registered");
            return;
        }
        if !self.activate(name) {
            warn!(
                target: "scene",
                "Unknown scene '{}' (available: {}), starting '{}'",
                name,
                self.names().join(", "),
                self.scenes[0].name()
            );
            self.switch_to(0);
        }
    }

    /// Cycles to the next scene in registration order.
    pub fn next(&mut self) {
        if self.scenes.len() > 1 {
            self.switch_to((self.active + 1) % self.scenes.len());
        }
    }

    //--- Frame ------------------------------------------------------------

    /// Loads resources for every registered scene.
    pub fn load_all(&mut self, painter: &mut dyn Painter, assets: &Path) {
        for scene in &mut self.scenes {
            scene.load(painter, assets);
        }
    }

    /// Offers `action` to the active scene.
    pub fn handle_action(&mut self, action: DemoAction) -> bool {
        match self.scenes.get_mut(self.active) {
            Some(scene) => scene.handle_action(action),
            None => false,
        }
    }

    pub fn update(&mut self, frame: &FrameContext) {
        if let Some(scene) = self.scenes.get_mut(self.active) {
            scene.update(frame);
        }
    }

    pub fn draw(&mut self, painter: &mut dyn Painter, frame: &FrameContext) {
        if let Some(scene) = self.scenes.get_mut(self.active) {
            scene.draw(painter, frame);
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn index_of(&self, name: &str) -> Option<usize> {
        self.scenes.iter().position(|s| s.name() == name)
    }

    fn switch_to(&mut self, index: usize) {
        if index != self.active {
            if let Some(scene) = self.scenes.get_mut(self.active) {
                scene.on_exit();
            }
            self.active = index;
        }
        if let Some(scene) = self.scenes.get_mut(index) {
            info!(target: "scene", "Active scene: '{}'", scene.name());
            scene.on_enter();
        }
    }
}

//=== Tests ===============================================================
