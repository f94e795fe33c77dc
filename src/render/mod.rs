//=========================================================================
// Render Subsystem
//
// Immediate-mode vector drawing seam between the scenes and the canvas
// library.
//
// Architecture:
// ```text
//   Scene::draw ──► &mut dyn Painter ──► FemtovgPainter ──► femtovg::Canvas<OpenGl>
//                                    └─► RecordingPainter (tests)
// ```
//
// The `Painter` vocabulary follows the classic nanovg model: a transform
// and style stack (`save`/`restore`), a current path built by primitive
// calls, and `fill`/`stroke` that consume the current style.
//
//=========================================================================

//=== Submodules ==========================================================

mod color;
pub mod draw;
mod femtovg_painter;

#[cfg(test)]
pub(crate) mod recording;

//=== Public API ==========================================================

pub use color::Rgba;
pub use draw::CircleStyle;
pub use femtovg_painter::FemtovgPainter;

//=== External Dependencies ===============================================

use std::path::Path;

use glam::Vec2;

//=== Internal Dependencies ===============================================

use crate::error::RenderError;

//=== ImageHandle =========================================================

/// Opaque handle to an image owned by a painter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub(crate) usize);

//=== Viewport ============================================================

/// Drawable area for one frame, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        Self { width, height, pixel_ratio }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }
}

//=== Painter =============================================================

/// Immediate-mode vector drawing context.
///
/// Calls between `begin_frame` and `end_frame` build paths in the current
/// transform. `save`/`restore` push and pop both the transform and the
/// fill/stroke style.
pub trait Painter {
    //--- Frame ------------------------------------------------------------

    fn begin_frame(&mut self, viewport: Viewport);
    fn end_frame(&mut self);

    //--- State stack ------------------------------------------------------

    fn save(&mut self);
    fn restore(&mut self);

    //--- Transform --------------------------------------------------------

    fn translate(&mut self, x: f32, y: f32);
    fn scale(&mut self, x: f32, y: f32);

    /// Rotates the current transform by `angle` radians.
    fn rotate(&mut self, angle: f32);

    //--- Path -------------------------------------------------------------

    /// Starts a new, empty current path.
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn circle(&mut self, cx: f32, cy: f32, radius: f32);
    fn ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32);

    //--- Style ------------------------------------------------------------

    fn fill_color(&mut self, color: Rgba);

    /// Fills with `image` stretched over the rect at `origin` with `size`.
    fn fill_image(&mut self, image: ImageHandle, origin: Vec2, size: Vec2, alpha: f32);

    fn stroke_color(&mut self, color: Rgba);
    fn stroke_width(&mut self, width: f32);

    //--- Paint ------------------------------------------------------------

    fn fill(&mut self);
    fn stroke(&mut self);

    //--- Images -----------------------------------------------------------

    fn load_image(&mut self, path: &Path) -> Result<ImageHandle, RenderError>;

    /// Image size in pixels, `None` for an unknown handle.
    fn image_size(&self, image: ImageHandle) -> Option<Vec2>;
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_center() {
        let viewport = Viewport::new(1024.0, 768.0, 1.0);
        assert_eq!(viewport.center(), Vec2::new(512.0, 384.0));
        assert_eq!(viewport.size(), Vec2::new(1024.0, 768.0));
    }
}
