//! Great-circle formulae on [`GeoPoint`]
//!
//! Adapted from the well-known collection of spherical trigonometry formulae
//! at <https://www.movable-type.co.uk/scripts/latlong.html>. All angles are
//! degrees at the interface and radians inside. Distances are in the unit
//! of the receiver's radius.

use crate::GeoPoint;
use crate::utils::angle::{acos_clamped, acos_or_zero, asin_clamped, wrap_360, wrap_pi};
use std::f64::consts::{PI, TAU};

/// Interior-angle sines below this are treated as exactly zero
///
/// `sin(π)` evaluates to about `1.2e-16`, so the collinear case of
/// [`GeoPoint::intersection`] needs a tolerance to be recognised.
const SIN_EPSILON: f64 = 1e-12;

fn snapped_sin(angle: f64) -> f64 {
    let sin = angle.sin();
    if sin.abs() < SIN_EPSILON { 0.0 } else { sin }
}

/// Haversine of the angular separation between two positions in radians
///
/// Returns the `a` term of the haversine formula, clamped to `[0, 1]`.
fn haversine(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = lat2 - lat1;
    let d_lng = lng2 - lng1;
    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    a.clamp(0.0, 1.0)
}

impl GeoPoint {
    fn lat_rad(&self) -> f64 {
        self.lat().to_radians()
    }

    fn lng_rad(&self) -> f64 {
        self.lng().to_radians()
    }

    /// Great-circle distance using the haversine formula
    pub fn distance(&self, other: &GeoPoint) -> f64 {
        let a = haversine(self.lat_rad(), self.lng_rad(), other.lat_rad(), other.lng_rad());
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        self.radius() * c
    }

    /// Initial bearing toward `other`, in `[0, 360)`
    ///
    /// On a great circle course the bearing changes along the way, see
    /// [`GeoPoint::final_bearing`].
    pub fn bearing(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.lat_rad();
        let lat2 = other.lat_rad();
        let d_lng = (other.lng() - self.lng()).to_radians();

        let y = d_lng.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();
        wrap_360(y.atan2(x).to_degrees())
    }

    /// Bearing on arrival at `other`, in `[0, 360)`
    pub fn final_bearing(&self, other: &GeoPoint) -> f64 {
        wrap_360(other.bearing(self) + 180.0)
    }

    /// Half-way point along the great circle to `other`
    pub fn midpoint(&self, other: &GeoPoint) -> GeoPoint {
        let lat1 = self.lat_rad();
        let lng1 = self.lng_rad();
        let lat2 = other.lat_rad();
        let d_lng = (other.lng() - self.lng()).to_radians();

        let bx = lat2.cos() * d_lng.cos();
        let by = lat2.cos() * d_lng.sin();

        let lat3 = (lat1.sin() + lat2.sin()).atan2(((lat1.cos() + bx).powi(2) + by * by).sqrt());
        let lng3 = wrap_pi(lng1 + by.atan2(lat1.cos() + bx));

        self.derive(lat3.to_degrees(), lng3.to_degrees())
    }

    /// Point reached after travelling `distance` on the initial `bearing`
    pub fn destination(&self, bearing: f64, distance: f64) -> GeoPoint {
        let dist = distance / self.radius();
        let brng = bearing.to_radians();
        let lat1 = self.lat_rad();
        let lng1 = self.lng_rad();

        let lat2 = asin_clamped(lat1.sin() * dist.cos() + lat1.cos() * dist.sin() * brng.cos());
        let lng2 = lng1
            + (brng.sin() * dist.sin() * lat1.cos()).atan2(dist.cos() - lat1.sin() * lat2.sin());

        self.derive(lat2.to_degrees(), wrap_pi(lng2).to_degrees())
    }

    /// Crossing of the great circles leaving `self` on `bearing1` and
    /// `other` on `bearing2`
    ///
    /// Returns `None` when the two points coincide, when both courses run
    /// along the line between the points (infinitely many intersections) or
    /// when the courses diverge so that the intersection is ambiguous.
    ///
    /// Bearings out of a pole are not defined, so a course starting at a pole
    /// does not yield the crossing along the meridian `bearing1` suggests.
    pub fn intersection(&self, bearing1: f64, other: &GeoPoint, bearing2: f64) -> Option<GeoPoint> {
        let lat1 = self.lat_rad();
        let lng1 = self.lng_rad();
        let lat2 = other.lat_rad();
        let lng2 = other.lng_rad();
        let brng13 = bearing1.to_radians();
        let brng23 = bearing2.to_radians();

        let dist12 = 2.0 * haversine(lat1, lng1, lat2, lng2).sqrt().asin();
        if dist12 == 0.0 {
            log::trace!("no intersection: coincident points");
            return None;
        }

        // initial/final bearings between the points
        let brng_a =
            acos_or_zero((lat2.sin() - lat1.sin() * dist12.cos()) / (dist12.sin() * lat1.cos()));
        let brng_b =
            acos_or_zero((lat1.sin() - lat2.sin() * dist12.cos()) / (dist12.sin() * lat2.cos()));

        let (brng12, brng21) = if (lng2 - lng1).sin() > 0.0 {
            (brng_a, TAU - brng_b)
        } else {
            (TAU - brng_a, brng_b)
        };

        let alpha1 = (brng13 - brng12 + PI).rem_euclid(TAU) - PI; // angle 2-1-3
        let alpha2 = (brng21 - brng23 + PI).rem_euclid(TAU) - PI; // angle 1-2-3

        let (sin1, sin2) = (snapped_sin(alpha1), snapped_sin(alpha2));
        if sin1 == 0.0 && sin2 == 0.0 {
            log::trace!("no intersection: courses run along the same great circle");
            return None;
        }
        if sin1 * sin2 < 0.0 {
            log::trace!("no intersection: ambiguous course directions");
            return None;
        }

        let alpha3 = acos_clamped(-alpha1.cos() * alpha2.cos() + sin1 * sin2 * dist12.cos());
        let dist13 =
            (dist12.sin() * sin1 * sin2).atan2(alpha2.cos() + alpha1.cos() * alpha3.cos());
        let lat3 = asin_clamped(lat1.sin() * dist13.cos() + lat1.cos() * dist13.sin() * brng13.cos());
        let d_lng13 = (brng13.sin() * dist13.sin() * lat1.cos())
            .atan2(dist13.cos() - lat1.sin() * lat3.sin());
        let lng3 = wrap_pi(lng1 + d_lng13);

        Some(self.derive(lat3.to_degrees(), lng3.to_degrees()))
    }

    /// Signed distance from `self` to the great circle through `p1` and `p2`
    ///
    /// Positive values are to the right of the path from `p1` to `p2`.
    pub fn cross_track(&self, p1: &GeoPoint, p2: &GeoPoint) -> f64 {
        let r = self.radius();
        let d13 = p1.distance(self) / p1.radius();
        let brng13 = p1.bearing(self).to_radians();
        let brng12 = p1.bearing(p2).to_radians();
        asin_clamped(d13.sin() * (brng13 - brng12).sin()) * r
    }

    /// Distance from `p1` along the path toward `p2` to the point closest to `self`
    pub fn along_track(&self, p1: &GeoPoint, p2: &GeoPoint) -> f64 {
        let r = self.radius();
        let d13 = p1.distance(self) / p1.radius();
        let dxt = self.cross_track(p1, p2) / r;
        acos_clamped(d13.cos() / dxt.cos()) * r
    }

    /// Highest latitude reached by the great circle leaving `self` on `bearing`
    pub fn max_lat(&self, bearing: f64) -> f64 {
        acos_clamped((bearing.to_radians().sin() * self.lat_rad().cos()).abs()).to_degrees()
    }
}
