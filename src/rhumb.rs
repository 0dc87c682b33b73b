//! Rhumb-line (loxodrome) formulae on [`GeoPoint`]
//!
//! A rhumb line keeps a constant compass bearing. It is a straight line on a
//! Mercator chart and generally longer than the great circle between the
//! same points.

use crate::GeoPoint;
use crate::utils::angle::{isometric_lat, stretch_factor, wrap_360, wrap_pi};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

impl GeoPoint {
    /// Distance along the rhumb line to `other`
    ///
    /// Longitude differences over 180° take the shorter way across the
    /// antimeridian.
    pub fn rhumb_distance(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.lat().to_radians();
        let lat2 = other.lat().to_radians();
        let d_lat = (other.lat() - self.lat()).to_radians();
        let mut d_lng = (other.lng() - self.lng()).abs().to_radians();
        if d_lng > PI {
            d_lng = TAU - d_lng;
        }

        let q = stretch_factor(lat1, lat2);
        (d_lat * d_lat + q * q * d_lng * d_lng).sqrt() * self.radius()
    }

    /// Constant bearing of the rhumb line to `other`, in `[0, 360)`
    pub fn rhumb_bearing(&self, other: &GeoPoint) -> f64 {
        let d_psi = isometric_lat(other.lat().to_radians()) - isometric_lat(self.lat().to_radians());
        let mut d_lng = (other.lng() - self.lng()).to_radians();
        if d_lng.abs() > PI {
            d_lng = if d_lng > 0.0 { -(TAU - d_lng) } else { TAU + d_lng };
        }

        wrap_360(d_lng.atan2(d_psi).to_degrees())
    }

    /// Point reached after travelling `distance` on the constant `bearing`
    ///
    /// A course that would run past a pole is reflected back so that the
    /// latitude stays within `[-90, 90]`.
    pub fn rhumb_destination(&self, bearing: f64, distance: f64) -> GeoPoint {
        let d = distance / self.radius();
        let brng = bearing.to_radians();
        let lat1 = self.lat().to_radians();
        let lng1 = self.lng().to_radians();

        let mut lat2 = lat1 + d * brng.cos();
        let q = stretch_factor(lat1, lat2);
        let d_lng = d * brng.sin() / q;

        if lat2.abs() > FRAC_PI_2 {
            log::trace!("rhumb course passes a pole, reflecting latitude {lat2} rad");
            lat2 = if lat2 > 0.0 { PI - lat2 } else { -PI - lat2 };
        }
        let lng2 = wrap_pi(lng1 + d_lng);

        self.derive(lat2.to_degrees(), lng2.to_degrees())
    }
}

#[cfg(test)]
mod tests {
    use crate::{EARTH_RADIUS_NM, GeoPoint};

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual} (tolerance {tolerance})"
        );
    }

    fn degrees_nm(deg: f64) -> f64 {
        EARTH_RADIUS_NM * deg.to_radians()
    }

    #[test]
    fn test_rhumb_along_equator() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 10.0);
        assert_close(a.rhumb_distance(&b), degrees_nm(10.0), 1e-6);
        assert_close(a.rhumb_bearing(&b), 90.0, 1e-9);
        assert_close(b.rhumb_bearing(&a), 270.0, 1e-9);
    }

    #[test]
    fn test_rhumb_along_parallel() {
        // at 60° a degree of longitude is half as long
        let a = GeoPoint::new(60.0, 0.0);
        let b = GeoPoint::new(60.0, 10.0);
        assert_close(a.rhumb_distance(&b), degrees_nm(5.0), 1e-6);
    }

    #[test]
    fn test_rhumb_across_antimeridian() {
        let a = GeoPoint::new(0.0, 170.0);
        let b = GeoPoint::new(0.0, -170.0);
        assert_close(a.rhumb_distance(&b), degrees_nm(20.0), 1e-6);
        assert_close(a.rhumb_bearing(&b), 90.0, 1e-9);
        assert_close(b.rhumb_bearing(&a), 270.0, 1e-9);
    }

    #[test]
    fn test_rhumb_known_value() {
        // Dover to Calais on a 6371 km sphere
        let dover = GeoPoint::new(51.127, 1.338).with_radius(6371.0);
        let calais = GeoPoint::new(50.964, 1.853);
        assert_close(dover.rhumb_distance(&calais), 40.31, 0.01);
        assert_close(dover.rhumb_bearing(&calais), 116.72, 0.01);

        let end = dover.rhumb_destination(116.7, 40.23);
        assert_close(end.lat(), 50.9644, 1e-4);
        assert_close(end.lng(), 1.8521, 1e-4);
        assert_eq!(end.radius(), 6371.0);
    }

    #[test]
    fn test_rhumb_destination_round_trip() {
        let start = GeoPoint::new(-33.86, 151.21);
        for bearing in [10.0, 80.0, 135.0, 240.0, 300.0] {
            let end = start.rhumb_destination(bearing, 500.0);
            assert_close(start.rhumb_distance(&end), 500.0, 1e-6);
            assert_close(start.rhumb_bearing(&end), bearing, 1e-6);
        }
    }

    #[test]
    fn test_rhumb_destination_east_west() {
        let end = GeoPoint::new(0.0, 175.0).rhumb_destination(90.0, degrees_nm(10.0));
        assert_close(end.lat(), 0.0, 1e-9);
        assert_close(end.lng(), -175.0, 1e-9);
    }

    #[test]
    fn test_rhumb_destination_past_pole() {
        let end = GeoPoint::new(80.0, 0.0).rhumb_destination(0.0, degrees_nm(20.0));
        assert_close(end.lat(), 80.0, 1e-9);

        let end = GeoPoint::new(-80.0, 0.0).rhumb_destination(180.0, degrees_nm(20.0));
        assert_close(end.lat(), -80.0, 1e-9);
        assert!(end.lng().is_finite());
    }
}
