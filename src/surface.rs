//! Drawing surface abstraction
//!
//! A [`DrawSurface`] receives primitives with fully resolved transforms; it
//! keeps no transform state of its own. Backends adapt these calls to a real
//! 2-D context (GPU canvas, pixel buffer, terminal). [`RecordingSurface`]
//! captures the calls as a retained command list, which is how the tests
//! count ticks and labels.

use nalgebra::{Matrix3, Point2};

/// Axis-aligned rectangle in local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle centered on the local origin
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(-width / 2.0, -height / 2.0, width, height)
    }
}

/// Rendering surface with immediate 2-D primitives
///
/// Every geometry call carries the transform mapping its local coordinates
/// to device coordinates. Implementors that are temporarily without a
/// backing context report `is_ready() == false`; callers skip the frame and
/// try again later, there is no error to handle.
pub trait DrawSurface {
    /// Whether the surface can accept draws right now
    fn is_ready(&self) -> bool;

    /// Clear the whole surface
    fn clear(&mut self);

    /// Fill a rectangle given in local coordinates under `transform`
    fn fill_rect(&mut self, transform: &Matrix3<f32>, rect: Rect);

    /// Fill a circle; `center` is in local coordinates under `transform`
    fn fill_circle(&mut self, transform: &Matrix3<f32>, center: Point2<f32>, radius: f32);

    /// Stroke a circle outline
    fn stroke_circle(
        &mut self,
        transform: &Matrix3<f32>,
        center: Point2<f32>,
        radius: f32,
        line_width: f32,
    );

    /// Draw text centered on `position` in local coordinates under
    /// `transform`
    fn fill_text(&mut self, transform: &Matrix3<f32>, text: &str, position: Point2<f32>, size: f32);

    /// Flush the frame to the screen
    fn present(&mut self);
}

/// One recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    FillRect {
        transform: Matrix3<f32>,
        rect: Rect,
    },
    FillCircle {
        transform: Matrix3<f32>,
        center: Point2<f32>,
        radius: f32,
    },
    StrokeCircle {
        transform: Matrix3<f32>,
        center: Point2<f32>,
        radius: f32,
        line_width: f32,
    },
    FillText {
        transform: Matrix3<f32>,
        text: String,
        position: Point2<f32>,
        size: f32,
    },
    Present,
}

/// Surface that records operations instead of rasterizing them
///
/// # Example
/// ```
/// use compass_rose::{DialRenderer, DrawOp, RecordingSurface};
///
/// let mut surface = RecordingSurface::new();
/// DialRenderer::new().render(&mut surface, 0.0);
/// let texts = surface
///     .ops()
///     .iter()
///     .filter(|op| matches!(op, DrawOp::FillText { .. }))
///     .count();
/// assert!(texts > 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    ready: bool,
}

impl RecordingSurface {
    /// Create a ready-to-draw recording surface
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            ready: true,
        }
    }

    /// Create a surface that reports not-ready, for exercising the deferred
    /// draw path
    pub fn not_ready() -> Self {
        Self {
            ops: Vec::new(),
            ready: false,
        }
    }

    /// Mark the surface ready (e.g. the platform context arrived)
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    /// All operations recorded so far, in draw order
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Recorded text operations as (text, device position) pairs
    pub fn texts(&self) -> Vec<(String, Point2<f32>)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillText {
                    transform,
                    text,
                    position,
                    ..
                } => Some((text.clone(), transform.transform_point(position))),
                _ => None,
            })
            .collect()
    }

    /// Discard everything recorded so far
    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill_rect(&mut self, transform: &Matrix3<f32>, rect: Rect) {
        self.ops.push(DrawOp::FillRect {
            transform: *transform,
            rect,
        });
    }

    fn fill_circle(&mut self, transform: &Matrix3<f32>, center: Point2<f32>, radius: f32) {
        self.ops.push(DrawOp::FillCircle {
            transform: *transform,
            center,
            radius,
        });
    }

    fn stroke_circle(
        &mut self,
        transform: &Matrix3<f32>,
        center: Point2<f32>,
        radius: f32,
        line_width: f32,
    ) {
        self.ops.push(DrawOp::StrokeCircle {
            transform: *transform,
            center,
            radius,
            line_width,
        });
    }

    fn fill_text(
        &mut self,
        transform: &Matrix3<f32>,
        text: &str,
        position: Point2<f32>,
        size: f32,
    ) {
        self.ops.push(DrawOp::FillText {
            transform: *transform,
            text: text.to_string(),
            position,
            size,
        });
    }

    fn present(&mut self) {
        self.ops.push(DrawOp::Present);
    }
}
