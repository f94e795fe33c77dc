//=========================================================================
// Recording Painter (test only)
//=========================================================================
//
// A `Painter` that records fills and strokes with world-space geometry,
// so scenes and draw helpers can be tested without a GL context.
//
// Transforms are tracked with `glam::Affine2`. Radii and rect sizes are
// scaled by the transform's x-axis length; rotation of rects and ellipses
// is not recorded.
//
//=========================================================================

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use glam::{Affine2, Vec2};

use super::{ImageHandle, Painter, Rgba, Viewport};
use crate::error::RenderError;

//=== Recorded Types ======================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Shape {
    Rect { origin: Vec2, size: Vec2 },
    Circle { center: Vec2, radius: f32 },
    Ellipse { center: Vec2, rx: f32, ry: f32 },
    Line { from: Vec2, to: Vec2 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Paint {
    Color(Rgba),
    Image { image: ImageHandle, alpha: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Op {
    BeginFrame(Viewport),
    EndFrame,
    Fill { paint: Paint, shapes: Vec<Shape> },
    Stroke { color: Rgba, width: f32, shapes: Vec<Shape> },
}

#[derive(Debug, Clone, Copy)]
struct Style {
    fill: Paint,
    stroke: Rgba,
    stroke_width: f32,
}

//=== RecordingPainter ====================================================

pub(crate) struct RecordingPainter {
    ops: Vec<Op>,
    transform: Affine2,
    style: Style,
    stack: Vec<(Affine2, Style)>,
    max_depth: usize,
    path: Vec<Shape>,
    pen: Vec2,
    available: HashMap<PathBuf, Vec2>,
    images: Vec<Vec2>,
}

impl RecordingPainter {
    pub(crate) fn new() -> Self {
        Self {
            ops: Vec::new(),
            transform: Affine2::IDENTITY,
            style: Style {
                fill: Paint::Color(Rgba::WHITE),
                stroke: Rgba::BLACK,
                stroke_width: 1.0,
            },
            stack: Vec::new(),
            max_depth: 0,
            path: Vec::new(),
            pen: Vec2::ZERO,
            available: HashMap::new(),
            images: Vec::new(),
        }
    }

    /// Makes `path` loadable, reporting `size` pixels.
    pub(crate) fn with_image(mut self, path: impl Into<PathBuf>, size: Vec2) -> Self {
        self.available.insert(path.into(), size);
        self
    }

    //--- Queries ----------------------------------------------------------

    pub(crate) fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Current `save` nesting; zero when every save was restored.
    pub(crate) fn depth(&self) -> usize {
        self.stack.len()
    }

    pub(crate) fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Centers and radii of filled circles, in draw order.
    pub(crate) fn filled_circles(&self) -> Vec<(Vec2, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Fill { shapes, .. } => Some(shapes),
                _ => None,
            })
            .flatten()
            .filter_map(|shape| match shape {
                Shape::Circle { center, radius } => Some((*center, *radius)),
                _ => None,
            })
            .collect()
    }

    /// Fills painted with the given image, as `(origin, size)`.
    pub(crate) fn image_fills(&self, image: ImageHandle) -> Vec<(Vec2, Vec2)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Fill { paint: Paint::Image { image: i, .. }, shapes } if *i == image => {
                    Some(shapes)
                }
                _ => None,
            })
            .flatten()
            .filter_map(|shape| match shape {
                Shape::Rect { origin, size } => Some((*origin, *size)),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn strokes(&self) -> Vec<(Rgba, f32, Shape)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Stroke { color, width, shapes } => Some((color, width, shapes)),
                _ => None,
            })
            .flat_map(|(c, w, shapes)| shapes.iter().map(move |s| (*c, *w, *s)))
            .collect()
    }

    //--- Internal Helpers -------------------------------------------------

    fn point(&self, x: f32, y: f32) -> Vec2 {
        self.transform.transform_point2(Vec2::new(x, y))
    }

    fn length(&self, len: f32) -> f32 {
        len * self.transform.matrix2.x_axis.length()
    }
}

//=== Painter Implementation ==============================================

impl Painter for RecordingPainter {
    fn begin_frame(&mut self, viewport: Viewport) {
        self.transform = Affine2::IDENTITY;
        self.stack.clear();
        self.ops.push(Op::BeginFrame(viewport));
    }

    fn end_frame(&mut self) {
        self.ops.push(Op::EndFrame);
    }

    fn save(&mut self) {
        self.stack.push((self.transform, self.style));
        self.max_depth = self.max_depth.max(self.stack.len());
    }

    fn restore(&mut self) {
        if let Some((transform, style)) = self.stack.pop() {
            self.transform = transform;
            self.style = style;
        }
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.transform = self.transform * Affine2::from_translation(Vec2::new(x, y));
    }

    fn scale(&mut self, x: f32, y: f32) {
        self.transform = self.transform * Affine2::from_scale(Vec2::new(x, y));
    }

    fn rotate(&mut self, angle: f32) {
        self.transform = self.transform * Affine2::from_angle(angle);
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.pen = self.point(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let to = self.point(x, y);
        self.path.push(Shape::Line { from: self.pen, to });
        self.pen = to;
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let origin = self.point(x, y);
        let size = self.transform.matrix2 * Vec2::new(width, height);
        self.path.push(Shape::Rect { origin, size });
    }

    fn circle(&mut self, cx: f32, cy: f32, radius: f32) {
        let center = self.point(cx, cy);
        let radius = self.length(radius);
        self.path.push(Shape::Circle { center, radius });
    }

    fn ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32) {
        let center = self.point(cx, cy);
        let (rx, ry) = (self.length(rx), self.length(ry));
        self.path.push(Shape::Ellipse { center, rx, ry });
    }

    fn fill_color(&mut self, color: Rgba) {
        self.style.fill = Paint::Color(color);
    }

    fn fill_image(&mut self, image: ImageHandle, _origin: Vec2, _size: Vec2, alpha: f32) {
        self.style.fill = Paint::Image { image, alpha };
    }

    fn stroke_color(&mut self, color: Rgba) {
        self.style.stroke = color;
    }

    fn stroke_width(&mut self, width: f32) {
        self.style.stroke_width = width;
    }

    fn fill(&mut self) {
        self.ops.push(Op::Fill { paint: self.style.fill, shapes: self.path.clone() });
    }

    fn stroke(&mut self) {
        self.ops.push(Op::Stroke {
            color: self.style.stroke,
            width: self.style.stroke_width,
            shapes: self.path.clone(),
        });
    }

    fn load_image(&mut self, path: &Path) -> Result<ImageHandle, RenderError> {
        match self.available.get(path) {
            Some(size) => {
                self.images.push(*size);
                Ok(ImageHandle(self.images.len() - 1))
            }
            None => Err(RenderError::ImageLoad {
                path: path.to_path_buf(),
                reason: "no such file".into(),
            }),
        }
    }

    fn image_size(&self, image: ImageHandle) -> Option<Vec2> {
        self.images.get(image.0).copied()
    }
}
