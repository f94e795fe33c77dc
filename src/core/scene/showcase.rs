//=========================================================================
// Showcase Scene
//=========================================================================
//
// An image swept around the window center with marker circles.
//
// Transform for the swept image (half scale by default):
// ```text
//   translate(center) · scale(s) · translate(-image_size / 2) · translate(sweep)
// ```
// The marker circle sits at the image-centered origin of the scaled
// frame; the large circle and the cursor circle are drawn unscaled.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::Path;

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::{load_image, FrameContext, Scene};
use crate::config::ShowcaseConfig;
use crate::render::draw::{draw_circle, draw_image};
use crate::render::{ImageHandle, Painter};

//=== ShowcaseScene =======================================================

pub struct ShowcaseScene {
    config: ShowcaseConfig,
    image: Option<ImageHandle>,
    backdrop: Option<ImageHandle>,
}

impl ShowcaseScene {
    pub const NAME: &'static str = "showcase";

    pub fn new(config: &ShowcaseConfig) -> Self {
        Self { config: config.clone(), image: None, backdrop: None }
    }

    /// Offset of the swept image at scene time `t`, in scaled units.
    pub fn sweep_offset(&self, t: f64) -> Vec2 {
        let degrees = (self.config.sweep_degrees_per_second as f64 * t).rem_euclid(360.0);
        Vec2::from_angle(degrees.to_radians() as f32) * self.config.sweep_radius
    }
}

//=== Scene Implementation ================================================

impl Scene for ShowcaseScene {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn load(&mut self, painter: &mut dyn Painter, assets: &Path) {
        self.image = load_image(painter, assets, &self.config.image);
        self.backdrop = match &self.config.backdrop {
            Some(path) => load_image(painter, assets, path),
            None => None,
        };
    }

    fn draw(&mut self, painter: &mut dyn Painter, frame: &FrameContext) {
        let center = frame.viewport.center();
        let style = &self.config.circle;

        if let Some(backdrop) = self.backdrop {
            draw_image(painter, backdrop, Some(Vec2::ZERO));
        }

        painter.save();
        painter.translate(center.x, center.y);
        painter.scale(self.config.image_scale, self.config.image_scale);

        if let Some(image) = self.image {
            if let Some(size) = painter.image_size(image) {
                let half = size * 0.5;
                painter.translate(-half.x, -half.y);
                draw_image(painter, image, Some(self.sweep_offset(frame.time)));
                painter.translate(half.x, half.y);
            }
        }
        draw_circle(painter, Vec2::ZERO, self.config.marker_radius, style);

        painter.restore();

        draw_circle(painter, center, self.config.center_radius, style);

        if let Some(cursor) = frame.cursor {
            if self.config.cursor_radius > 0.0 {
                draw_circle(painter, cursor, self.config.cursor_radius, style);
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
