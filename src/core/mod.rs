//=========================================================================
// Core Systems
//
// Frame-level coordinator for everything that is not platform glue.
//
// Responsibilities:
// - Drain platform events from the bridge channel
// - Turn them into input state and demo actions
// - Apply global actions (quit, pause, rate, scene cycling)
// - Advance the animation clock and drive the active scene
//
// Per frame, called from the platform's redraw handler:
// ```text
//   tick(dt, viewport)                     draw(painter, viewport)
//     1. EventCollector::collect_frame()     1. begin_frame
//     2. InputSystem::process_frame()        2. clear background
//     3. apply actions                       3. active scene draws
//     4. AnimationClock::advance(dt)         4. end_frame
//     5. active scene updates
// ```
//
// Everything runs on the event-loop thread; the bridge channel only
// decouples input capture from input interpretation.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod clock;
pub mod input;
pub(crate) mod platform_bridge;
pub mod scene;

//=== Standard Library Imports ============================================

use std::path::PathBuf;
use std::time::Duration;

//=== External Crates =====================================================

use crossbeam_channel::Receiver;
use glam::Vec2;
use log::{debug, info};

//=== Internal Modules ====================================================

use crate::config::Config;
use crate::render::{draw, Painter, Rgba, Viewport};
use clock::AnimationClock;
use input::{DemoAction, InputSystem};
use platform_bridge::{EventCollector, PlatformEvent, TickControl};
use scene::{FrameContext, OrreryScene, SceneManager, ShowcaseScene};

//=== CoreSystems =========================================================

/// Owns the input pipeline, the animation clock and the scenes.
pub(crate) struct CoreSystems {
    collector: EventCollector,
    input: InputSystem,
    clock: AnimationClock,
    scenes: SceneManager,
    background: Rgba,
    assets: PathBuf,
    cursor: Option<Vec2>,
}

impl CoreSystems {
    //--- Construction -----------------------------------------------------

    /// Builds every core system from a validated config and registers the
    /// built-in scenes.
    pub(crate) fn new(receiver: Receiver<PlatformEvent>, config: &Config) -> Self {
        let mut scenes = SceneManager::new();
        scenes.register(OrreryScene::new(&config.orrery));
        scenes.register(ShowcaseScene::new(&config.showcase));
        scenes.start(&config.scene.initial);

        Self {
            collector: EventCollector::new(receiver),
            input: InputSystem::new(),
            clock: AnimationClock::new(&config.animation),
            scenes,
            background: config.scene.background,
            assets: config.scene.assets.clone(),
            cursor: None,
        }
    }

    /// Loads scene resources. Needs a live painter, so it runs once the
    /// GL context exists.
    pub(crate) fn load_resources(&mut self, painter: &mut dyn Painter) {
        info!(target: "core", "Loading scene resources from {}", self.assets.display());
        self.scenes.load_all(painter, &self.assets);
    }

    //--- Frame ------------------------------------------------------------

    /// Processes this frame's input and advances the animation by `dt`.
    pub(crate) fn tick(&mut self, dt: Duration, viewport: Viewport) -> TickControl {
        if self.collector.collect_frame() == TickControl::Exit {
            info!(target: "core", "Window closed");
            return TickControl::Exit;
        }

        self.input.process_frame(self.collector.batches());
        if self.input.state().cursor_moved() {
            let (x, y) = self.input.state().cursor();
            self.cursor = Some(Vec2::new(x, y));
        }

        let actions = self.input.actions().to_vec();
        for action in actions {
            if self.apply_action(action) == TickControl::Exit {
                return TickControl::Exit;
            }
        }

        self.clock.advance(dt);
        let frame = self.frame(viewport);
        self.scenes.update(&frame);

        TickControl::Continue
    }

    /// Draws one frame of the active scene.
    pub(crate) fn draw(&mut self, painter: &mut dyn Painter, viewport: Viewport) {
        let frame = self.frame(viewport);

        painter.begin_frame(viewport);
        draw::clear(painter, viewport, self.background);
        self.scenes.draw(painter, &frame);
        painter.end_frame();
    }

    //--- Queries ----------------------------------------------------------

    pub(crate) fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub(crate) fn active_scene(&self) -> Option<&str> {
        self.scenes.active_name()
    }

    /// Short status line, e.g. `orrery: running @ 1x, t=3.2s`.
    pub(crate) fn status(&self) -> String {
        format!("{}: {}", self.active_scene().unwrap_or("-"), self.clock().status())
    }

    //--- Internal Helpers -------------------------------------------------

    fn frame(&self, viewport: Viewport) -> FrameContext {
        FrameContext {
            viewport,
            time: self.clock.elapsed(),
            cursor: self.cursor,
        }
    }

    fn apply_action(&mut self, action: DemoAction) -> TickControl {
        if !action.is_global() {
            if !self.scenes.handle_action(action) {
                debug!(target: "core", "Action {} ignored by the active scene", action);
            }
            return TickControl::Continue;
        }

        match action {
            DemoAction::Quit => {
                info!(target: "core", "Quit requested");
                return TickControl::Exit;
            }
            DemoAction::TogglePause => self.clock.toggle_pause(),
            DemoAction::Faster => self.clock.faster(),
            DemoAction::Slower => self.clock.slower(),
            DemoAction::ResetRate => self.clock.reset_rate(),
            DemoAction::NextScene => self.scenes.next(),
            DemoAction::ToggleOrbits => {}
        }
        TickControl::Continue
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
