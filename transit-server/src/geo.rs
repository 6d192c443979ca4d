//! Great-circle geometry on a mean-Earth-radius sphere.

/// Mean Earth radius in meters, derived from the WGS84 equatorial and
/// polar radii as R = (2a + b) / 3.
pub const MEAN_EARTH_RADIUS_M: f64 = (2.0 * 6_378_137.0 + 6_356_752.3) / 3.0;

/// A geographic coordinate in floating-point degrees.
///
/// No range validation is applied: out-of-range values are accepted and
/// simply produce geometrically meaningless distances.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in degrees.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Great-circle distance between two coordinates, in meters.
///
/// Spherical law of cosines. Coincident points return exactly 0; for
/// nearly coincident points the arccosine argument is clamped to
/// `[-1, 1]`, since rounding can push it past 1 and the result would
/// otherwise be NaN.
pub fn distance(from: Coordinate, to: Coordinate) -> f64 {
    if from == to {
        return 0.0;
    }
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let delta_lng = (from.lng - to.lng).abs().to_radians();
    let arc = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * delta_lng.cos();
    arc.clamp(-1.0, 1.0).acos() * MEAN_EARTH_RADIUS_M
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One degree of latitude on the mean-radius sphere, in meters.
    const ONE_DEGREE_M: f64 = MEAN_EARTH_RADIUS_M * std::f64::consts::PI / 180.0;

    #[test]
    fn coincident_points_are_zero() {
        let p = Coordinate::new(55.611087, 37.20829);
        assert_eq!(distance(p, p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(1.0, 0.0);
        assert!((distance(a, b) - ONE_DEGREE_M).abs() < 1.0);
    }

    #[test]
    fn one_degree_of_longitude_on_equator() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 1.0);
        assert!((distance(a, b) - ONE_DEGREE_M).abs() < 1.0);
    }

    #[test]
    fn longitude_shrinks_away_from_equator() {
        let a = Coordinate::new(60.0, 0.0);
        let b = Coordinate::new(60.0, 1.0);
        // At 60°N a degree of longitude spans about half a degree of arc.
        let d = distance(a, b);
        assert!(d < ONE_DEGREE_M * 0.51);
        assert!(d > ONE_DEGREE_M * 0.49);
    }

    #[test]
    fn symmetric() {
        let a = Coordinate::new(55.574371, 37.6517);
        let b = Coordinate::new(55.581065, 37.64839);
        assert_eq!(distance(a, b), distance(b, a));
    }

    #[test]
    fn antipodal_points_are_half_circumference() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        let half = MEAN_EARTH_RADIUS_M * std::f64::consts::PI;
        assert!((distance(a, b) - half).abs() < 1.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coordinate() -> impl Strategy<Value = Coordinate> {
        (-85.0f64..85.0, -180.0f64..180.0).prop_map(|(lat, lng)| Coordinate::new(lat, lng))
    }

    proptest! {
        /// Distance is symmetric in its arguments.
        #[test]
        fn symmetry(a in coordinate(), b in coordinate()) {
            prop_assert_eq!(distance(a, b), distance(b, a));
        }

        /// Distance is never negative and never NaN.
        #[test]
        fn non_negative_and_finite(a in coordinate(), b in coordinate()) {
            let d = distance(a, b);
            prop_assert!(d >= 0.0);
            prop_assert!(d.is_finite());
        }

        /// A point is at distance zero from itself.
        #[test]
        fn zero_from_self(a in coordinate()) {
            prop_assert_eq!(distance(a, a), 0.0);
        }
    }
}
