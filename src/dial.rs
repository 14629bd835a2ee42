//! Procedural compass-rose dial rendering

use log::debug;
use nalgebra::Point2;

use crate::heading::CardinalDirection;
use crate::surface::{DrawSurface, Rect};
use crate::transform::TransformStack;
use crate::types::{CardinalMode, DialSettings};

/// Renders the rotating compass-rose dial face
///
/// Each frame walks all 360 one-degree angular positions. A tick mark is
/// drawn when the degree is even or a multiple of 15; ticks at multiples of
/// 15° are taller and wider and annotated with the degree number. Cardinal
/// letters sit at 45° offsets (or 90° in four-point mode). Degree labels and
/// cardinal letters are counter-rotated so they stay upright no matter how
/// far the dial has turned.
///
/// The whole tick/label set is rotated by `-rotation` around the canvas
/// midpoint, so the tick for the current heading ends up at the top of the
/// canvas. All radii derive from fractions of the canvas height; rendering
/// at a different resolution scales the dial proportionally.
///
/// # Example
/// ```
/// use compass_rose::{DialRenderer, RecordingSurface};
///
/// let mut surface = RecordingSurface::new();
/// DialRenderer::new().render(&mut surface, 123.4);
/// assert!(!surface.ops().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct DialRenderer {
    settings: DialSettings,
}

impl DialRenderer {
    /// Create a renderer with default dial geometry
    pub fn new() -> Self {
        Self::with_settings(DialSettings::default())
    }

    /// Create a renderer with the given dial geometry
    pub fn with_settings(settings: DialSettings) -> Self {
        Self { settings }
    }

    /// The dial geometry in use
    pub fn settings(&self) -> &DialSettings {
        &self.settings
    }

    /// Draw one frame of the dial at the given rotation (degrees, canonical)
    ///
    /// If the surface is not ready the frame is skipped entirely; the next
    /// call retries.
    pub fn render<S: DrawSurface>(&self, surface: &mut S, rotation: f32) {
        if !surface.is_ready() {
            debug!("dial surface not ready, skipping frame");
            return;
        }

        let settings = &self.settings;
        let mut stack = TransformStack::new();

        surface.clear();

        // All drawing is relative to the canvas midpoint
        stack.translate(settings.width / 2.0, settings.height / 2.0);

        self.draw_face(surface, &mut stack);
        self.draw_ticks(surface, &mut stack, rotation);
        self.draw_cardinals(surface, &mut stack, rotation);
        self.draw_index(surface, &mut stack);

        surface.present();
    }

    /// Outer ring and center hub
    fn draw_face<S: DrawSurface>(&self, surface: &mut S, stack: &mut TransformStack) {
        let settings = &self.settings;
        let ring_radius = settings.tick_radius * settings.height;

        surface.stroke_circle(&stack.matrix(), Point2::new(0.0, 0.0), ring_radius, 1.0);
        surface.fill_circle(
            &stack.matrix(),
            Point2::new(0.0, 0.0),
            settings.height * 0.01,
        );
    }

    /// Tick marks and degree labels for all 360 angular candidates
    fn draw_ticks<S: DrawSurface>(&self, surface: &mut S, stack: &mut TransformStack, rotation: f32) {
        let settings = &self.settings;
        let outer_radius = settings.tick_radius * settings.height;
        let label_radius = settings.label_radius * settings.height;

        for degree in 0u32..360 {
            let major = degree % 15 == 0;
            // Even degrees carry ticks; majors are drawn even when odd
            // (15°, 45°, ...) so every degree label has its tick.
            if degree % 2 != 0 && !major {
                continue;
            }

            let angle = (degree as f32 - rotation).to_radians();
            let (length, width) = if major {
                (
                    settings.major_tick_length * settings.height,
                    settings.major_tick_width,
                )
            } else {
                (
                    settings.minor_tick_length * settings.height,
                    settings.minor_tick_width,
                )
            };

            stack.save();
            stack.rotate(angle);
            // The tick hangs inward from the outer radius
            stack.translate(0.0, -(outer_radius - length / 2.0));
            surface.fill_rect(&stack.matrix(), Rect::centered(width, length));
            stack.restore();

            if major {
                stack.save();
                stack.rotate(angle);
                stack.translate(0.0, -label_radius);
                // Counter-rotate so the number reads upright in device space
                stack.rotate(-angle);
                surface.fill_text(
                    &stack.matrix(),
                    &degree.to_string(),
                    Point2::new(0.0, 0.0),
                    settings.label_font_size,
                );
                stack.restore();
            }
        }
    }

    /// Cardinal letters, counter-rotated upright
    fn draw_cardinals<S: DrawSurface>(
        &self,
        surface: &mut S,
        stack: &mut TransformStack,
        rotation: f32,
    ) {
        let settings = &self.settings;
        let radius = settings.cardinal_radius * settings.height;
        let step = match settings.cardinal_mode {
            CardinalMode::EightPoint => 45u32,
            CardinalMode::FourPoint => 90u32,
        };

        for degree in (0u32..360).step_by(step as usize) {
            let direction =
                CardinalDirection::from_degrees_with_mode(degree as f32, settings.cardinal_mode);
            let angle = (degree as f32 - rotation).to_radians();

            stack.save();
            stack.rotate(angle);
            stack.translate(0.0, -radius);
            stack.rotate(-angle);
            surface.fill_text(
                &stack.matrix(),
                direction.abbreviation(),
                Point2::new(0.0, 0.0),
                settings.cardinal_font_size,
            );
            stack.restore();
        }
    }

    /// Fixed index mark at the top of the canvas, pointing at the current
    /// heading
    fn draw_index<S: DrawSurface>(&self, surface: &mut S, stack: &mut TransformStack) {
        let settings = &self.settings;
        let outer_radius = settings.tick_radius * settings.height;
        let length = settings.major_tick_length * settings.height * 1.5;

        stack.save();
        stack.translate(0.0, -(outer_radius + length / 2.0));
        surface.fill_rect(
            &stack.matrix(),
            Rect::centered(settings.major_tick_width, length),
        );
        stack.restore();
    }
}

impl Default for DialRenderer {
    fn default() -> Self {
        Self::new()
    }
}
