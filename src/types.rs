//! Core types and settings for the compass-rose crate

use std::time::Duration;

/// Heading reference frame
///
/// Selects which heading field of a [`HeadingSample`] feeds the pipeline.
///
/// # Example
/// ```
/// use compass_rose::{CompassApp, CompassSettings, HeadingReference};
///
/// let settings = CompassSettings {
///     reference: HeadingReference::Magnetic,
///     ..Default::default()
/// };
/// let app = CompassApp::with_settings(settings);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingReference {
    /// Heading relative to geographic north
    #[default]
    True,
    /// Heading relative to magnetic north (uncorrected for declination)
    Magnetic,
}

/// Compass-rose variant
///
/// Controls how many cardinal letters the dial carries and how wide the
/// cardinal buckets are when labeling a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardinalMode {
    /// N, E, S, W at 90° spacing
    FourPoint,
    /// N, NE, E, SE, S, SW, W, NW at 45° spacing
    #[default]
    EightPoint,
}

/// A single heading reading from the device sensors
///
/// Produced at each poll tick (~1-2 Hz). Transient; each sample supersedes
/// the previous one and nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeadingSample {
    /// Heading relative to geographic north in degrees.
    /// May be negative or >= 360 due to sensor noise.
    pub true_heading: f32,
    /// Heading relative to magnetic north in degrees
    pub magnetic_heading: f32,
    /// Estimated accuracy in degrees
    pub accuracy: f32,
}

impl HeadingSample {
    /// Raw heading for the chosen reference, before normalization
    pub fn select(&self, reference: HeadingReference) -> f32 {
        match reference {
            HeadingReference::True => self.true_heading,
            HeadingReference::Magnetic => self.magnetic_heading,
        }
    }
}

/// A single location reading from the device sensors
///
/// Same lifecycle as [`HeadingSample`]: transient, overwrite-on-arrival.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocationSample {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Altitude above sea level in meters
    pub altitude: f64,
    /// Ground speed in meters per second
    pub speed: f64,
}

/// Spring filter settings for the heading smoother
///
/// The defaults describe a critically damped spring
/// (`damping = 2 * sqrt(stiffness * mass)`), which converges to the target
/// without overshoot.
///
/// # Example
/// ```
/// use compass_rose::SmootherSettings;
///
/// let settings = SmootherSettings {
///     stiffness: 50.0, // softer spring, slower settle
///     damping: 2.0 * 50.0_f32.sqrt(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SmootherSettings {
    /// Spring constant in 1/s²
    pub stiffness: f32,
    /// Damping coefficient in 1/s
    pub damping: f32,
    /// Mass of the simulated body (typically 1.0)
    pub mass: f32,
    /// Rest threshold on displacement in degrees
    ///
    /// When the angle is within this distance of the target and speed is
    /// below [`rest_speed`](Self::rest_speed), the smoother snaps to the
    /// target and reports rest.
    pub rest_displacement: f32,
    /// Rest threshold on speed in degrees per second
    pub rest_speed: f32,
}

impl Default for SmootherSettings {
    fn default() -> Self {
        let stiffness = 100.0;
        let mass = 1.0;
        Self {
            stiffness,
            damping: 2.0 * (stiffness * mass).sqrt(),
            mass,
            rest_displacement: 0.01,
            rest_speed: 0.01,
        }
    }
}

/// Dial geometry settings
///
/// All radii and tick lengths are fractions of the canvas height, so a dial
/// rendered at 300px and one at 1200px have identical proportions.
#[derive(Debug, Clone, Copy)]
pub struct DialSettings {
    /// Canvas width in pixels
    pub width: f32,
    /// Canvas height in pixels
    pub height: f32,
    /// Compass-rose variant for the cardinal letters
    pub cardinal_mode: CardinalMode,
    /// Outer tick radius as a fraction of canvas height
    pub tick_radius: f32,
    /// Minor tick length as a fraction of canvas height
    pub minor_tick_length: f32,
    /// Major tick length as a fraction of canvas height
    pub major_tick_length: f32,
    /// Minor tick width in pixels
    pub minor_tick_width: f32,
    /// Major tick width in pixels
    pub major_tick_width: f32,
    /// Degree-label radius as a fraction of canvas height
    pub label_radius: f32,
    /// Cardinal-letter radius as a fraction of canvas height
    pub cardinal_radius: f32,
    /// Degree-label font size in pixels
    pub label_font_size: f32,
    /// Cardinal-letter font size in pixels
    pub cardinal_font_size: f32,
}

impl Default for DialSettings {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 300.0,
            cardinal_mode: CardinalMode::EightPoint,
            tick_radius: 0.45,
            minor_tick_length: 0.02,
            major_tick_length: 0.04,
            minor_tick_width: 1.0,
            major_tick_width: 2.5,
            label_radius: 0.38,
            cardinal_radius: 0.30,
            label_font_size: 11.0,
            cardinal_font_size: 20.0,
        }
    }
}

/// Location polling accuracy hint passed to the sensor source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationAccuracy {
    Lowest,
    Low,
    #[default]
    Balanced,
    High,
    Highest,
}

/// Options for a location subscription
#[derive(Debug, Clone, Copy)]
pub struct LocationOptions {
    /// Accuracy hint for the platform provider
    pub accuracy: LocationAccuracy,
    /// Interval between location samples
    pub poll_interval: Duration,
}

impl Default for LocationOptions {
    fn default() -> Self {
        Self {
            accuracy: LocationAccuracy::Balanced,
            poll_interval: Duration::from_millis(1000),
        }
    }
}

/// Result of the location permission gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_select_reference() {
        let sample = HeadingSample {
            true_heading: 10.0,
            magnetic_heading: 15.0,
            accuracy: 1.0,
        };

        assert_eq!(sample.select(HeadingReference::True), 10.0);
        assert_eq!(sample.select(HeadingReference::Magnetic), 15.0);
    }

    #[test]
    fn test_default_spring_is_critically_damped() {
        let settings = SmootherSettings::default();
        let critical = 2.0 * (settings.stiffness * settings.mass).sqrt();

        assert!((settings.damping - critical).abs() < 1e-6);
    }

    #[test]
    fn test_dial_settings_fractions_in_range() {
        let settings = DialSettings::default();

        for fraction in [
            settings.tick_radius,
            settings.minor_tick_length,
            settings.major_tick_length,
            settings.label_radius,
            settings.cardinal_radius,
        ] {
            assert!(fraction > 0.0 && fraction < 0.5);
        }
    }
}
