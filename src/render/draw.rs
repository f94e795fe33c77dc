//=========================================================================
// Draw Helpers
//=========================================================================
//
// Small composite drawing routines shared by the scenes. Each helper
// brackets its work in save/restore, so callers keep their transform and
// style.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use super::{ImageHandle, Painter, Rgba, Viewport};

//=== CircleStyle =========================================================

/// Fill and outline of a marker circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleStyle {
    pub stroke: Rgba,
    pub fill: Rgba,
    pub stroke_width: f32,
}

impl Default for CircleStyle {
    /// White 5px outline over translucent red.
    fn default() -> Self {
        Self {
            stroke: Rgba::WHITE,
            fill: Rgba::rgba(255, 0, 0, 96),
            stroke_width: 5.0,
        }
    }
}

//=== Helpers =============================================================

/// Fills the whole viewport with `color`.
pub fn clear(painter: &mut dyn Painter, viewport: Viewport, color: Rgba) {
    painter.save();
    painter.begin_path();
    painter.rect(0.0, 0.0, viewport.width, viewport.height);
    painter.fill_color(color);
    painter.fill();
    painter.restore();
}

/// Draws `image` at its natural size with its top-left corner at `pos`
/// (or at the current origin).
///
/// Returns `false` without drawing when the painter does not know the
/// image.
pub fn draw_image(painter: &mut dyn Painter, image: ImageHandle, pos: Option<Vec2>) -> bool {
    let Some(size) = painter.image_size(image) else {
        return false;
    };

    painter.save();
    if let Some(pos) = pos {
        painter.translate(pos.x, pos.y);
    }
    painter.begin_path();
    painter.rect(0.0, 0.0, size.x, size.y);
    painter.fill_image(image, Vec2::ZERO, size, 1.0);
    painter.fill();
    painter.restore();
    true
}

/// Draws a filled and outlined circle centered on `pos`.
pub fn draw_circle(painter: &mut dyn Painter, pos: Vec2, radius: f32, style: &CircleStyle) {
    painter.save();
    painter.translate(pos.x, pos.y);
    painter.begin_path();
    painter.stroke_color(style.stroke);
    painter.stroke_width(style.stroke_width);
    painter.fill_color(style.fill);
    painter.circle(0.0, 0.0, radius);
    painter.fill();
    painter.stroke();
    painter.restore();
}

//=========================================================================
// Unit Tests
//=========================================================================
