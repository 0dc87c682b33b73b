//! Angle helpers shared by the great-circle and rhumb-line formulae

use std::f64::consts::{FRAC_PI_4, PI, TAU};

/// `acos` with the argument clamped to `[-1, 1]`
///
/// Rounding can push a cosine a few ULPs past ±1, which would otherwise
/// produce NaN.
pub fn acos_clamped(v: f64) -> f64 {
    v.clamp(-1.0, 1.0).acos()
}

/// `asin` with the argument clamped to `[-1, 1]`
pub fn asin_clamped(v: f64) -> f64 {
    v.clamp(-1.0, 1.0).asin()
}

/// `acos` that reads a NaN result as an angle of 0
///
/// The argument is not clamped first: a NaN here (e.g. from `0 / 0` at a
/// pole) means "no meaningful angle" and collapses to 0.
pub fn acos_or_zero(v: f64) -> f64 {
    let angle = v.acos();
    if angle.is_nan() { 0.0 } else { angle }
}

/// Wrap a longitude in radians into `(-π, π]`
pub fn wrap_pi(lng: f64) -> f64 {
    PI - (PI - lng).rem_euclid(TAU)
}

/// Wrap a longitude difference in degrees into `(-180, 180]`
pub fn wrap_180(lng: f64) -> f64 {
    180.0 - (180.0 - lng).rem_euclid(360.0)
}

/// Wrap a bearing in degrees into `[0, 360)`
pub fn wrap_360(bearing: f64) -> f64 {
    let wrapped = bearing.rem_euclid(360.0);
    // rem_euclid rounds up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Isometric latitude `ψ = ln(tan(φ/2 + π/4))`
pub fn isometric_lat(lat: f64) -> f64 {
    (lat / 2.0 + FRAC_PI_4).tan().ln()
}

/// Mercator stretch factor `q = Δφ / Δψ`
///
/// Falls back to `cos(φ1)` when the ratio is not finite, which happens on an
/// east-west line where `Δψ == 0`.
pub fn stretch_factor(lat1: f64, lat2: f64) -> f64 {
    let d_lat = lat2 - lat1;
    let d_psi = isometric_lat(lat2) - isometric_lat(lat1);
    let q = d_lat / d_psi;
    if q.is_finite() {
        q
    } else {
        log::trace!("degenerate rhumb line at {lat1} rad, using cos(lat) as stretch factor");
        lat1.cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_functions_never_return_nan() {
        assert_eq!(acos_clamped(1.000_000_000_000_2), 0.0);
        assert_eq!(acos_clamped(-1.000_000_000_000_2), PI);
        assert_eq!(asin_clamped(1.000_000_000_000_2), PI / 2.0);
        assert!(!asin_clamped(-1.5).is_nan());
    }

    #[test]
    fn acos_or_zero_swallows_nan() {
        assert_eq!(acos_or_zero(f64::NAN), 0.0);
        assert_eq!(acos_or_zero(2.0), 0.0);
        assert_eq!(acos_or_zero(0.0), PI / 2.0);
    }

    #[test]
    fn wrap_pi_range() {
        assert_eq!(wrap_pi(PI), PI);
        assert_eq!(wrap_pi(-PI), PI);
        assert_eq!(wrap_pi(0.0), 0.0);
        assert!((wrap_pi(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-12);
        assert!((wrap_pi(-3.0 * PI / 2.0) - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn wrap_180_range() {
        assert_eq!(wrap_180(180.0), 180.0);
        assert_eq!(wrap_180(-180.0), 180.0);
        assert_eq!(wrap_180(190.0), -170.0);
        assert_eq!(wrap_180(-340.0), 20.0);
    }

    #[test]
    fn wrap_360_range() {
        assert_eq!(wrap_360(-90.0), 270.0);
        assert_eq!(wrap_360(360.0), 0.0);
        assert_eq!(wrap_360(-1e-300), 0.0);
    }

    #[test]
    fn stretch_factor_east_west() {
        let lat = 0.5_f64;
        assert_eq!(stretch_factor(lat, lat), lat.cos());
    }

    #[test]
    fn stretch_factor_meridian_is_finite() {
        let q = stretch_factor(0.1, 0.2);
        assert!(q.is_finite());
        assert!(q > 0.0 && q < 1.0);
    }
}
