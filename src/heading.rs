//! Heading normalization and cardinal-direction mapping

use log::warn;

use crate::types::CardinalMode;

/// Normalize a raw heading reading into the canonical range [0, 360)
///
/// Raw sensor headings may be negative or >= 360° due to noise or the
/// platform reporting in (-180°, 180°]. The result is the Euclidean
/// remainder, so `normalize_degrees(r) == normalize_degrees(r + 360k)` for
/// any integer k.
///
/// Non-finite input (NaN, ±inf) maps to 0.0 and logs a warning; a compass
/// pointing north beats a dial spinning on garbage.
///
/// # Example
/// ```
/// use compass_rose::normalize_degrees;
///
/// assert_eq!(normalize_degrees(-10.0), 350.0);
/// assert_eq!(normalize_degrees(370.0), 10.0);
/// assert_eq!(normalize_degrees(0.0), 0.0);
/// ```
pub fn normalize_degrees(raw: f32) -> f32 {
    if !raw.is_finite() {
        warn!("non-finite heading reading {raw}, treating as 0°");
        return 0.0;
    }

    let normalized = raw.rem_euclid(360.0);
    // rem_euclid(-1e-7, 360.0) can round to exactly 360.0
    if normalized >= 360.0 { 0.0 } else { normalized }
}

/// Compass-rose direction label
///
/// Derived purely from a canonical heading by fixed angular bucketing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardinalDirection {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CardinalDirection {
    const EIGHT_POINT: [CardinalDirection; 8] = [
        CardinalDirection::North,
        CardinalDirection::NorthEast,
        CardinalDirection::East,
        CardinalDirection::SouthEast,
        CardinalDirection::South,
        CardinalDirection::SouthWest,
        CardinalDirection::West,
        CardinalDirection::NorthWest,
    ];

    const FOUR_POINT: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::East,
        CardinalDirection::South,
        CardinalDirection::West,
    ];

    /// Map a heading to the nearest of the 8 compass points
    ///
    /// The range [0, 360) is partitioned into eight 45°-wide buckets centered
    /// on N (0°), NE (45°), ..., NW (315°). Bucket edges use arithmetic
    /// rounding: 22.4° is still N, 22.5° rounds up to NE, so 44° maps to NE.
    ///
    /// The input is normalized first, so negative and >= 360° headings are
    /// accepted.
    ///
    /// # Example
    /// ```
    /// use compass_rose::CardinalDirection;
    ///
    /// assert_eq!(CardinalDirection::from_degrees(0.0), CardinalDirection::North);
    /// assert_eq!(CardinalDirection::from_degrees(90.0), CardinalDirection::East);
    /// assert_eq!(CardinalDirection::from_degrees(350.0), CardinalDirection::North);
    /// ```
    pub fn from_degrees(heading: f32) -> Self {
        let normalized = normalize_degrees(heading);
        let bucket = (normalized / 45.0).round() as usize % 8;
        Self::EIGHT_POINT[bucket]
    }

    /// Map a heading to the nearest compass point for the given mode
    ///
    /// Four-point mode buckets on 90° with the same rounding rule (edges at
    /// 45°, 135°, 225°, 315° round up).
    pub fn from_degrees_with_mode(heading: f32, mode: CardinalMode) -> Self {
        match mode {
            CardinalMode::EightPoint => Self::from_degrees(heading),
            CardinalMode::FourPoint => {
                let normalized = normalize_degrees(heading);
                let bucket = (normalized / 90.0).round() as usize % 4;
                Self::FOUR_POINT[bucket]
            }
        }
    }

    /// Cardinal letter(s) as drawn on the dial
    pub fn abbreviation(&self) -> &'static str {
        match self {
            CardinalDirection::North => "N",
            CardinalDirection::NorthEast => "NE",
            CardinalDirection::East => "E",
            CardinalDirection::SouthEast => "SE",
            CardinalDirection::South => "S",
            CardinalDirection::SouthWest => "SW",
            CardinalDirection::West => "W",
            CardinalDirection::NorthWest => "NW",
        }
    }

    /// Center heading of this direction's bucket in degrees
    pub fn degrees(&self) -> f32 {
        match self {
            CardinalDirection::North => 0.0,
            CardinalDirection::NorthEast => 45.0,
            CardinalDirection::East => 90.0,
            CardinalDirection::SouthEast => 135.0,
            CardinalDirection::South => 180.0,
            CardinalDirection::SouthWest => 225.0,
            CardinalDirection::West => 270.0,
            CardinalDirection::NorthWest => 315.0,
        }
    }
}

/// Signed shortest arc from one heading to another, in (-180, 180]
///
/// Both inputs are normalized first. The result is the displacement to add
/// to `from` so that it reaches an angle equivalent to `to` along the short
/// way around the dial.
///
/// # Example
/// ```
/// use compass_rose::shortest_arc_degrees;
///
/// assert_eq!(shortest_arc_degrees(359.0, 1.0), 2.0);
/// assert_eq!(shortest_arc_degrees(10.0, 350.0), -20.0);
/// ```
pub fn shortest_arc_degrees(from: f32, to: f32) -> f32 {
    let delta = normalize_degrees(to) - normalize_degrees(from);
    if delta > 180.0 {
        delta - 360.0
    } else if delta <= -180.0 {
        delta + 360.0
    } else {
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_canonical_range() {
        for raw in [-720.0, -359.5, -10.0, 0.0, 44.0, 359.99, 360.0, 1234.5] {
            let normalized = normalize_degrees(raw);
            assert!(
                (0.0..360.0).contains(&normalized),
                "normalize({raw}) = {normalized} out of range"
            );
        }
    }

    #[test]
    fn test_normalize_known_values() {
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-360.0), 0.0);
    }

    #[test]
    fn test_normalize_periodicity() {
        for raw in [0.0, 13.7, 180.0, 271.3] {
            for k in [-3.0, -1.0, 1.0, 2.0] {
                let shifted = normalize_degrees(raw + 360.0 * k);
                assert!(
                    (shifted - normalize_degrees(raw)).abs() < 1e-3,
                    "normalize({raw} + 360*{k}) = {shifted}"
                );
            }
        }
    }

    #[test]
    fn test_normalize_non_finite_maps_to_zero() {
        assert_eq!(normalize_degrees(f32::NAN), 0.0);
        assert_eq!(normalize_degrees(f32::INFINITY), 0.0);
        assert_eq!(normalize_degrees(f32::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_cardinal_eight_point() {
        assert_eq!(CardinalDirection::from_degrees(0.0), CardinalDirection::North);
        assert_eq!(CardinalDirection::from_degrees(90.0), CardinalDirection::East);
        assert_eq!(CardinalDirection::from_degrees(180.0), CardinalDirection::South);
        assert_eq!(CardinalDirection::from_degrees(270.0), CardinalDirection::West);
        assert_eq!(CardinalDirection::from_degrees(45.0), CardinalDirection::NorthEast);
        assert_eq!(CardinalDirection::from_degrees(315.0), CardinalDirection::NorthWest);
    }

    #[test]
    fn test_cardinal_bucket_edges_round_up() {
        // 22.5° is the N/NE edge; arithmetic rounding sends it to NE
        assert_eq!(CardinalDirection::from_degrees(22.4), CardinalDirection::North);
        assert_eq!(CardinalDirection::from_degrees(22.5), CardinalDirection::NorthEast);
        assert_eq!(CardinalDirection::from_degrees(44.0), CardinalDirection::NorthEast);
        // Headings within 22.5° of north on either side are N
        assert_eq!(CardinalDirection::from_degrees(350.0), CardinalDirection::North);
        assert_eq!(CardinalDirection::from_degrees(-10.0), CardinalDirection::North);
    }

    #[test]
    fn test_cardinal_four_point() {
        let mode = CardinalMode::FourPoint;
        assert_eq!(
            CardinalDirection::from_degrees_with_mode(0.0, mode),
            CardinalDirection::North
        );
        assert_eq!(
            CardinalDirection::from_degrees_with_mode(44.0, mode),
            CardinalDirection::North
        );
        assert_eq!(
            CardinalDirection::from_degrees_with_mode(45.0, mode),
            CardinalDirection::East
        );
        assert_eq!(
            CardinalDirection::from_degrees_with_mode(180.0, mode),
            CardinalDirection::South
        );
        assert_eq!(
            CardinalDirection::from_degrees_with_mode(300.0, mode),
            CardinalDirection::West
        );
    }

    #[test]
    fn test_shortest_arc_across_seam() {
        assert_eq!(shortest_arc_degrees(359.0, 1.0), 2.0);
        assert_eq!(shortest_arc_degrees(1.0, 359.0), -2.0);
        assert_eq!(shortest_arc_degrees(0.0, 180.0), 180.0);
        assert_eq!(shortest_arc_degrees(90.0, 90.0), 0.0);
    }

    #[test]
    fn test_shortest_arc_accepts_raw_headings() {
        // equivalent of 350 -> equivalent of 10 is +20
        assert_eq!(shortest_arc_degrees(-10.0, 370.0), 20.0);
    }
}
