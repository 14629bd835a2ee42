//! Compass application pipeline
//!
//! Wires the sensor streams through normalization and smoothing into the
//! dial renderer: sensors → heading → smoother → dial. Everything runs on
//! one cooperative loop; sample handlers and the frame handler are plain
//! method calls with no shared-state coordination.

use log::warn;

use crate::dial::DialRenderer;
use crate::heading::{CardinalDirection, normalize_degrees};
use crate::smoother::HeadingSmoother;
use crate::surface::DrawSurface;
use crate::types::{
    DialSettings, HeadingReference, HeadingSample, LocationSample, Permission, SmootherSettings,
};

/// Top-level configuration for [`CompassApp`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CompassSettings {
    /// Which heading field of each sample drives the dial
    pub reference: HeadingReference,
    /// Spring filter settings
    pub smoother: SmootherSettings,
    /// Dial geometry
    pub dial: DialSettings,
}

/// The compass pipeline: latest heading, smoothed dial state, location
/// readout
///
/// Sample handlers overwrite state; the per-frame [`advance_frame`]
/// (CompassApp::advance_frame) drives the spring, and [`draw`]
/// (CompassApp::draw) renders the dial whenever the surface is ready.
///
/// # Example
/// ```
/// use compass_rose::{CompassApp, HeadingSample, RecordingSurface};
///
/// let mut app = CompassApp::new();
/// app.on_heading_sample(&HeadingSample { true_heading: 90.0, ..Default::default() });
///
/// let mut surface = RecordingSurface::new();
/// app.advance_frame(1.0 / 60.0);
/// app.draw(&mut surface);
/// ```
pub struct CompassApp {
    settings: CompassSettings,
    dial: DialRenderer,
    smoother: HeadingSmoother,
    /// Latest canonical heading in [0, 360)
    heading: f32,
    direction: CardinalDirection,
    location: LocationSample,
    location_enabled: bool,
    first_sample_seen: bool,
}

impl CompassApp {
    /// Create an app with default settings, pointing north
    pub fn new() -> Self {
        Self::with_settings(CompassSettings::default())
    }

    /// Create an app with the given settings
    pub fn with_settings(settings: CompassSettings) -> Self {
        Self {
            settings,
            dial: DialRenderer::with_settings(settings.dial),
            smoother: HeadingSmoother::with_settings(settings.smoother),
            heading: 0.0,
            direction: CardinalDirection::North,
            location: LocationSample::default(),
            location_enabled: true,
            first_sample_seen: false,
        }
    }

    /// Feed a heading sample into the pipeline
    ///
    /// The sample's heading (per the configured reference) is normalized
    /// into [0, 360), the cardinal label recomputed, and the smoother
    /// re-targeted. Each sample strictly supersedes the previous one.
    ///
    /// The first sample snaps the dial directly so startup does not animate
    /// a sweep from north.
    pub fn on_heading_sample(&mut self, sample: &HeadingSample) {
        let raw = sample.select(self.settings.reference);
        self.heading = normalize_degrees(raw);
        self.direction = CardinalDirection::from_degrees_with_mode(
            self.heading,
            self.settings.dial.cardinal_mode,
        );

        if self.first_sample_seen {
            self.smoother.set_target(self.heading);
        } else {
            self.smoother.reset_to(self.heading);
            self.first_sample_seen = true;
        }
    }

    /// Feed a location sample into the pipeline
    ///
    /// Last-known values are retained until the next sample; a stream that
    /// stops simply freezes the readout.
    pub fn on_location_sample(&mut self, sample: &LocationSample) {
        if self.location_enabled {
            self.location = *sample;
        }
    }

    /// Apply the outcome of the location permission gate
    ///
    /// Denial is non-fatal: the heading dial keeps working, the location
    /// readout resets to zero and stops updating, and the returned message
    /// should be shown to the user.
    pub fn on_permission(&mut self, permission: Permission) -> Option<&'static str> {
        match permission {
            Permission::Granted => {
                self.location_enabled = true;
                None
            }
            Permission::Denied => {
                warn!("location permission denied, disabling location display");
                self.location_enabled = false;
                self.location = LocationSample::default();
                Some("Permission to access location was denied")
            }
        }
    }

    /// Advance the dial animation by `dt` seconds
    ///
    /// Returns true while the dial is still moving; callers can stop
    /// scheduling frames once it settles.
    pub fn advance_frame(&mut self, dt: f32) -> bool {
        self.smoother.advance(dt)
    }

    /// Render the dial at the current smoothed rotation
    ///
    /// Skipped silently when the surface is not ready; nothing is queued.
    pub fn draw<S: DrawSurface>(&self, surface: &mut S) {
        self.dial.render(surface, self.smoother.rotation());
    }

    /// Latest canonical heading in [0, 360)
    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Cardinal label for the latest heading
    pub fn direction(&self) -> CardinalDirection {
        self.direction
    }

    /// Current smoothed dial rotation
    pub fn rotation(&self) -> f32 {
        self.smoother.rotation()
    }

    /// Last-known location, zeroed when permission was denied
    pub fn location(&self) -> &LocationSample {
        &self.location
    }

    /// Whether the location readout is active
    pub fn location_enabled(&self) -> bool {
        self.location_enabled
    }

    /// Formatted readout lines: heading, cardinal, coordinates, altitude
    ///
    /// Coordinates print to three decimals; altitude rounds to whole meters
    /// above 1 m and shows one decimal below.
    pub fn readout(&self) -> Readout {
        let altitude = self.location.altitude;
        let altitude_text = if altitude > 1.0 {
            format!("{}m", altitude.round())
        } else {
            format!("{altitude:.1}m")
        };

        Readout {
            heading: format!("{:.0}º", self.heading),
            direction: self.direction.abbreviation(),
            coordinates: format!(
                "{:.3}, {:.3}",
                self.location.latitude, self.location.longitude
            ),
            altitude: altitude_text,
        }
    }
}

impl Default for CompassApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Display strings for the data panel under the dial
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout {
    pub heading: String,
    pub direction: &'static str,
    pub coordinates: String,
    pub altitude: String,
}
