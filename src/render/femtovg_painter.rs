//=========================================================================
// femtovg Painter
//=========================================================================
//
// `Painter` over a `femtovg::Canvas<OpenGl>`.
//
// femtovg keeps paths and paints as values rather than canvas state, so
// this type owns the current path and a style stack that follows the
// canvas save/restore stack.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::ffi::{c_void, CStr};
use std::path::Path as FsPath;

use femtovg::{renderer::OpenGl, Canvas, ImageFlags, ImageId, Paint, Path};
use glam::Vec2;
use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::{ImageHandle, Painter, Rgba, Viewport};
use crate::error::RenderError;

//=== Style ===============================================================

#[derive(Debug, Clone, Copy)]
enum FillStyle {
    Color(Rgba),
    Image {
        id: ImageId,
        origin: Vec2,
        size: Vec2,
        alpha: f32,
    },
}

#[derive(Debug, Clone, Copy)]
struct Style {
    fill: FillStyle,
    stroke: Rgba,
    stroke_width: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: FillStyle::Color(Rgba::WHITE),
            stroke: Rgba::BLACK,
            stroke_width: 1.0,
        }
    }
}

//=== FemtovgPainter ======================================================

/// Vector painter bound to the current OpenGL context.
pub struct FemtovgPainter {
    canvas: Canvas<OpenGl>,
    path: Path,
    style: Style,
    styles: Vec<Style>,
    images: Vec<(ImageId, Vec2)>,
}

impl FemtovgPainter {
    /// Wraps an existing canvas.
    pub fn new(canvas: Canvas<OpenGl>) -> Self {
        Self {
            canvas,
            path: Path::new(),
            style: Style::default(),
            styles: Vec::with_capacity(16),
            images: Vec::new(),
        }
    }

    /// Creates the OpenGL renderer and canvas from a GL symbol loader.
    ///
    /// # Safety
    ///
    /// The GL context the loader resolves symbols for must be current on
    /// this thread for the whole lifetime of the painter.
    pub unsafe fn from_gl_loader<F>(loader: F) -> Result<Self, RenderError>
    where
        F: FnMut(&CStr) -> *const c_void,
    {
        let renderer = OpenGl::new_from_function_cstr(loader)?;
        let canvas = Canvas::new(renderer)?;
        info!(target: "render", "femtovg canvas created");
        Ok(Self::new(canvas))
    }

    fn fill_paint(&self) -> Paint {
        match self.style.fill {
            FillStyle::Color(color) => Paint::color(color.into()),
            FillStyle::Image { id, origin, size, alpha } => {
                Paint::image(id, origin.x, origin.y, size.x, size.y, 0.0, alpha)
            }
        }
    }

    fn stroke_paint(&self) -> Paint {
        let mut paint = Paint::color(self.style.stroke.into());
        paint.set_line_width(self.style.stroke_width);
        paint
    }
}

//=== Painter Implementation ==============================================

impl Painter for FemtovgPainter {
    fn begin_frame(&mut self, viewport: Viewport) {
        let ratio = viewport.pixel_ratio;
        let width = (viewport.width * ratio).round() as u32;
        let height = (viewport.height * ratio).round() as u32;

        self.canvas.set_size(width, height, ratio);
        self.canvas.reset_transform();
        // draw in logical pixels
        self.canvas.scale(ratio, ratio);

        self.style = Style::default();
        self.styles.clear();
        self.path = Path::new();
    }

    fn end_frame(&mut self) {
        self.canvas.flush();
    }

    fn save(&mut self) {
        self.canvas.save();
        self.styles.push(self.style);
    }

    fn restore(&mut self) {
        self.canvas.restore();
        if let Some(style) = self.styles.pop() {
            self.style = style;
        }
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.canvas.translate(x, y);
    }

    fn scale(&mut self, x: f32, y: f32) {
        self.canvas.scale(x, y);
    }

    fn rotate(&mut self, angle: f32) {
        self.canvas.rotate(angle);
    }

    fn begin_path(&mut self) {
        self.path = Path::new();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to(x, y);
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.path.rect(x, y, width, height);
    }

    fn circle(&mut self, cx: f32, cy: f32, radius: f32) {
        self.path.circle(cx, cy, radius);
    }

    fn ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32) {
        self.path.ellipse(cx, cy, rx, ry);
    }

    fn fill_color(&mut self, color: Rgba) {
        self.style.fill = FillStyle::Color(color);
    }

    fn fill_image(&mut self, image: ImageHandle, origin: Vec2, size: Vec2, alpha: f32) {
        if let Some((id, _)) = self.images.get(image.0) {
            self.style.fill = FillStyle::Image { id: *id, origin, size, alpha };
        }
    }

    fn stroke_color(&mut self, color: Rgba) {
        self.style.stroke = color;
    }

    fn stroke_width(&mut self, width: f32) {
        self.style.stroke_width = width;
    }

    fn fill(&mut self) {
        let paint = self.fill_paint();
        self.canvas.fill_path(&mut self.path, &paint);
    }

    fn stroke(&mut self) {
        let paint = self.stroke_paint();
        self.canvas.stroke_path(&mut self.path, &paint);
    }

    fn load_image(&mut self, path: &FsPath) -> Result<ImageHandle, RenderError> {
        let id = self
            .canvas
            .load_image_file(path, ImageFlags::empty())
            .map_err(|e| RenderError::ImageLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let (w, h) = self.canvas.image_size(id)?;
        let size = Vec2::new(w as f32, h as f32);
        debug!(target: "render", "Loaded {} ({}x{})", path.display(), w, h);

        self.images.push((id, size));
        Ok(ImageHandle(self.images.len() - 1))
    }

    fn image_size(&self, image: ImageHandle) -> Option<Vec2> {
        self.images.get(image.0).map(|(_, size)| *size)
    }
}
