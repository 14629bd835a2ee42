//! compass-rose - heading pipeline and compass dial rendering
//!
//! This crate implements the core of a compass application: it consumes
//! magnetometer/location-heading sensor samples, derives a canonical heading
//! in [0, 360) with a cardinal-direction label, smooths dial rotation with a
//! critically damped spring filter, and procedurally renders a rotating
//! compass-rose dial (360 angular tick candidates, degree labels every 15°,
//! counter-rotated cardinal letters).
//!
//! # Features
//!
//! - Canonical heading normalization with defined behavior for negative,
//!   oversized, and non-finite readings
//! - Shortest-path rotation across the 0°/360° seam
//! - Deterministic per-frame spring update (`advance(dt)`) decoupled from
//!   any UI scheduler
//! - Explicit push/pop transform stack instead of an implicit
//!   drawing-context state machine
//! - Surface abstraction with a recording backend for testing
//! - Idempotent, drop-safe sensor subscriptions
//!
//! # Quick Start
//!
//! ```rust
//! use compass_rose::{CompassApp, HeadingSample, RecordingSurface};
//!
//! let mut app = CompassApp::new();
//!
//! // Sensor callback delivers a new sample (~1-2 Hz)
//! app.on_heading_sample(&HeadingSample {
//!     true_heading: 132.5,
//!     magnetic_heading: 130.1,
//!     accuracy: 2.0,
//! });
//!
//! // Animation loop: advance the spring and redraw each frame
//! let mut surface = RecordingSurface::new();
//! while app.advance_frame(1.0 / 60.0) {
//!     app.draw(&mut surface);
//! }
//!
//! assert_eq!(app.readout().direction, "SE");
//! ```

mod app;
mod dial;
mod errors;
pub mod heading;
mod sensors;
mod smoother;
mod surface;
mod transform;
mod types;

pub use app::{CompassApp, CompassSettings, Readout};
pub use dial::DialRenderer;
pub use errors::{SensorError, SensorResult};
pub use heading::{CardinalDirection, normalize_degrees, shortest_arc_degrees};
pub use sensors::{
    HeadingCallback, LocationCallback, ReplaySource, SensorSource, Subscription,
};
pub use smoother::HeadingSmoother;
pub use surface::{DrawOp, DrawSurface, Rect, RecordingSurface};
pub use transform::TransformStack;
pub use types::{
    CardinalMode, DialSettings, HeadingReference, HeadingSample, LocationAccuracy,
    LocationOptions, LocationSample, Permission, SmootherSettings,
};
