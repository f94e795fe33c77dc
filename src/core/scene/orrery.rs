//=========================================================================
// Orrery Scene
//=========================================================================
//
// Planets on precessing elliptic orbits around a central star.
//
// Draw order per frame:
// ```text
//   background image (centered, optional)
//   orbit trails     (precessed ellipses, toggled with ToggleOrbits)
//   bodies           (ascending y, with a spin marker)
// ```
//
// `scale` zooms the system geometry only; stroke widths stay in window
// pixels.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::{Path, PathBuf};

use log::info;

//=== Internal Dependencies ===============================================

use super::orbit::{BodyState, OrbitalSystem};
use super::{load_image, FrameContext, Scene};
use crate::config::OrreryConfig;
use crate::core::input::DemoAction;
use crate::render::draw::{draw_circle, draw_image};
use crate::render::{CircleStyle, ImageHandle, Painter};

//=== OrreryScene =========================================================

pub struct OrreryScene {
    system: OrbitalSystem,
    background_path: Option<PathBuf>,
    background: Option<ImageHandle>,
    scale: f32,
    show_orbits: bool,
    orbit_width: f32,
    orbit_alpha: u8,
    spin_markers: bool,
}

impl OrreryScene {
    pub const NAME: &'static str = "orrery";

    pub fn new(config: &OrreryConfig) -> Self {
        Self {
            system: OrbitalSystem::new(config.bodies.clone()),
            background_path: config.background_image.clone(),
            background: None,
            scale: config.scale,
            show_orbits: config.show_orbits,
            orbit_width: config.orbit_width,
            orbit_alpha: config.orbit_alpha,
            spin_markers: config.spin_markers,
        }
    }

    pub fn system(&self) -> &OrbitalSystem {
        &self.system
    }

    pub fn shows_orbits(&self) -> bool {
        self.show_orbits
    }

    //--- Drawing ----------------------------------------------------------

    /// Converts a width in window pixels to the scaled system space.
    fn unscaled(&self, width: f32) -> f32 {
        width / self.scale
    }

    fn draw_orbits(&self, painter: &mut dyn Painter, t: f64) {
        for body in self.system.bodies().iter().filter(|b| b.has_orbit()) {
            let [rx, ry] = body.orbit;
            painter.save();
            painter.rotate(body.precession(t));
            painter.begin_path();
            painter.ellipse(0.0, 0.0, rx, ry);
            painter.stroke_color(body.stroke.with_alpha(self.orbit_alpha));
            painter.stroke_width(self.unscaled(self.orbit_width));
            painter.stroke();
            painter.restore();
        }
    }

    fn draw_body(&self, painter: &mut dyn Painter, state: &BodyState<'_>) {
        let body = state.body;
        let style = CircleStyle {
            stroke: body.stroke,
            fill: body.fill,
            stroke_width: self.unscaled(body.stroke_width),
        };
        draw_circle(painter, state.position, body.radius, &style);

        if self.spin_markers && body.radius > 0.0 {
            painter.save();
            painter.translate(state.position.x, state.position.y);
            painter.rotate(state.spin);
            painter.begin_path();
            painter.move_to(-body.radius, 0.0);
            painter.line_to(body.radius, 0.0);
            painter.stroke_color(body.stroke);
            painter.stroke_width(style.stroke_width);
            painter.stroke();
            painter.restore();
        }
    }
}

//=== Scene Implementation ================================================

impl Scene for OrreryScene {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn load(&mut self, painter: &mut dyn Painter, assets: &Path) {
        if let Some(path) = &self.background_path {
            self.background = load_image(painter, assets, path);
        }
    }

    fn draw(&mut self, painter: &mut dyn Painter, frame: &FrameContext) {
        let center = frame.viewport.center();

        if let Some(image) = self.background {
            if let Some(size) = painter.image_size(image) {
                draw_image(painter, image, Some(center - size * 0.5));
            }
        }

        painter.save();
        painter.translate(center.x, center.y);
        painter.scale(self.scale, self.scale);

        if self.show_orbits {
            self.draw_orbits(painter, frame.time);
        }
        for state in self.system.snapshot(frame.time) {
            self.draw_body(painter, &state);
        }

        painter.restore();
    }

    fn handle_action(&mut self, action: DemoAction) -> bool {
        match action {
            DemoAction::ToggleOrbits => {
                self.show_orbits = !self.show_orbits;
                info!(target: "scene", "Orbits {}", if self.show_orbits { "shown" } else { "hidden" });
                true
            }
            _ => false,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
