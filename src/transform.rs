//! Explicit 2-D transform stack for dial rendering
//!
//! The renderer composes translations and rotations through this stack and
//! hands fully resolved transforms to the drawing surface, instead of
//! mutating an implicit drawing-context state machine with save/restore
//! side effects.

use nalgebra::{Matrix3, Point2, Vector2};

/// Push/pop stack of homogeneous 2-D affine transforms
///
/// `translate`, `rotate`, and `scale` compose onto the current transform in
/// local coordinates (right-multiplication, matching canvas semantics).
/// `restore` on an empty stack is a no-op.
///
/// # Example
/// ```
/// use compass_rose::TransformStack;
/// use nalgebra::Point2;
///
/// let mut stack = TransformStack::new();
/// stack.translate(150.0, 150.0);
/// stack.save();
/// stack.rotate(std::f32::consts::FRAC_PI_2);
/// let rotated = stack.apply(Point2::new(0.0, -10.0));
/// stack.restore();
///
/// assert!((rotated.x - 160.0).abs() < 1e-4);
/// assert!((rotated.y - 150.0).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct TransformStack {
    current: Matrix3<f32>,
    saved: Vec<Matrix3<f32>>,
}

impl TransformStack {
    /// Create a stack holding the identity transform
    pub fn new() -> Self {
        Self {
            current: Matrix3::identity(),
            saved: Vec::new(),
        }
    }

    /// Compose a translation onto the current transform
    pub fn translate(&mut self, x: f32, y: f32) {
        self.current *= Matrix3::new_translation(&Vector2::new(x, y));
    }

    /// Compose a rotation (radians, counter-clockwise) onto the current
    /// transform
    pub fn rotate(&mut self, radians: f32) {
        self.current *= Matrix3::new_rotation(radians);
    }

    /// Compose a non-uniform scale onto the current transform
    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.current *= Matrix3::new_nonuniform_scaling(&Vector2::new(sx, sy));
    }

    /// Save the current transform so a later [`restore`](Self::restore) can
    /// return to it
    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Restore the most recently saved transform
    ///
    /// A restore with nothing saved leaves the current transform unchanged.
    pub fn restore(&mut self) {
        if let Some(previous) = self.saved.pop() {
            self.current = previous;
        }
    }

    /// Map a point from local coordinates through the current transform
    pub fn apply(&self, point: Point2<f32>) -> Point2<f32> {
        self.current.transform_point(&point)
    }

    /// The current composed transform matrix
    pub fn matrix(&self) -> Matrix3<f32> {
        self.current
    }

    /// Number of saved transforms
    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}
