//! Spring-damped heading smoother driving the dial rotation

use crate::heading::{normalize_degrees, shortest_arc_degrees};
use crate::types::SmootherSettings;

/// Damped spring filter converging the dial rotation toward the latest
/// heading
///
/// The smoother keeps an unwrapped (continuous) angle so the spring never
/// sees the 0°/360° seam. Each new target is mapped onto the unwrapped
/// equivalent nearest the current angle, so a jump from 359° to 1° animates
/// across the short 2° arc rather than unwinding 358°.
///
/// [`advance`](Self::advance) is an explicit per-frame state update with an
/// externally supplied time step, so the filter is deterministic and
/// independent of any UI scheduler.
///
/// # Example
/// ```
/// use compass_rose::HeadingSmoother;
///
/// let mut smoother = HeadingSmoother::new();
/// smoother.set_target(90.0);
///
/// // 60 fps until the dial settles
/// while !smoother.is_at_rest() {
///     smoother.advance(1.0 / 60.0);
/// }
/// assert!((smoother.rotation() - 90.0).abs() < 0.05);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HeadingSmoother {
    settings: SmootherSettings,
    /// Unwrapped rotation angle in degrees
    angle: f32,
    /// Angular velocity in degrees per second
    velocity: f32,
    /// Unwrapped target angle in degrees
    target: f32,
    at_rest: bool,
}

impl HeadingSmoother {
    /// Create a smoother at rest at 0° with default spring settings
    pub fn new() -> Self {
        Self::with_settings(SmootherSettings::default())
    }

    /// Create a smoother at rest at 0° with the given spring settings
    pub fn with_settings(settings: SmootherSettings) -> Self {
        Self {
            settings,
            angle: 0.0,
            velocity: 0.0,
            target: 0.0,
            at_rest: true,
        }
    }

    /// Re-target the spring at a new heading
    ///
    /// The heading is normalized and then unwrapped along the shortest arc
    /// from the current angle. A new target strictly supersedes the previous
    /// one; there is no queue of pending headings.
    pub fn set_target(&mut self, heading_degrees: f32) {
        let arc = shortest_arc_degrees(self.angle, heading_degrees);
        self.target = self.angle + arc;
        if arc.abs() >= self.settings.rest_displacement {
            self.at_rest = false;
        }
    }

    /// Advance the spring simulation by `dt` seconds
    ///
    /// Semi-implicit Euler integration of
    /// `acceleration = (stiffness * displacement - damping * velocity) / mass`.
    /// Once displacement and speed fall inside the rest thresholds the state
    /// snaps to the target, and further calls are no-ops until the target
    /// moves again.
    ///
    /// Returns true while the dial is still animating.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.at_rest || dt <= 0.0 {
            return !self.at_rest;
        }

        let displacement = self.target - self.angle;
        let acceleration = (self.settings.stiffness * displacement
            - self.settings.damping * self.velocity)
            / self.settings.mass;

        self.velocity += acceleration * dt;
        self.angle += self.velocity * dt;

        let settled = (self.target - self.angle).abs() < self.settings.rest_displacement
            && self.velocity.abs() < self.settings.rest_speed;
        if settled {
            self.angle = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }

        !self.at_rest
    }

    /// Current dial rotation in canonical [0, 360) degrees
    pub fn rotation(&self) -> f32 {
        normalize_degrees(self.angle)
    }

    /// Canonical heading the spring is converging toward
    pub fn target(&self) -> f32 {
        normalize_degrees(self.target)
    }

    /// Current angular velocity in degrees per second
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Whether the dial has settled on the target
    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Snap to the given heading with no animation
    ///
    /// Used when the first sample arrives, so the dial does not sweep from
    /// north to the actual heading on startup.
    pub fn reset_to(&mut self, heading_degrees: f32) {
        self.angle = normalize_degrees(heading_degrees);
        self.target = self.angle;
        self.velocity = 0.0;
        self.at_rest = true;
    }
}

impl Default for HeadingSmoother {
    fn default() -> Self {
        Self::new()
    }
}
