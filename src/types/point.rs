use std::fmt;

/// Mean Earth radius in nautical miles
///
/// Used by every distance computation on a point without its own radius.
pub const EARTH_RADIUS_NM: f64 = 3440.0;

/// A position on a sphere, in degrees
///
/// Latitude is clamped to `[-90, 90]` and longitude is folded into
/// `[-180, 180]` on construction (see [`GeoPoint::new`] for the exact
/// boundary convention). Distances use the point's radius, which defaults
/// to [`EARTH_RADIUS_NM`], so results are in nautical miles unless a
/// custom radius is attached.
///
/// Equality compares latitude, longitude and effective radius. The display
/// template is not part of a point's identity.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawGeoPoint"))]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    radius: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    format: Option<String>,
}

/// Untrusted wire form of a [`GeoPoint`], rebuilt through the constructors
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGeoPoint {
    lat: f64,
    lng: f64,
    #[serde(default)]
    radius: Option<f64>,
    #[serde(default)]
    format: Option<String>,
}

#[cfg(feature = "serde")]
impl From<RawGeoPoint> for GeoPoint {
    fn from(raw: RawGeoPoint) -> Self {
        let mut point = GeoPoint::new(raw.lat, raw.lng);
        if let Some(radius) = raw.radius {
            point = point.with_radius(radius);
        }
        point.format = raw.format;
        point
    }
}

impl GeoPoint {
    /// Create a point from latitude and longitude in degrees
    ///
    /// Longitude normalization follows
    /// `x = (lng % 180 != 0 ? 1 : -1) * sign(lng) * ((|lng| + 180) % 360 - 180)`:
    ///
    /// - `190` becomes `-170`, `-190` becomes `170`
    /// - positive odd multiples of 180 become `180`
    /// - negative odd multiples of 180 stay `-180`
    /// - even multiples of 180 become `0`
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat: lat.clamp(-90.0, 90.0),
            lng: normalize_lng(lng),
            radius: None,
            format: None,
        }
    }

    /// Attach a sphere radius
    ///
    /// The default radius, zero and NaN are not stored.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius).filter(|&r| r != 0.0 && !r.is_nan() && r != EARTH_RADIUS_NM);
        self
    }

    /// Attach a default display template
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Effective sphere radius
    pub fn radius(&self) -> f64 {
        self.radius.unwrap_or(EARTH_RADIUS_NM)
    }

    /// Display template attached to this point, if any
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// Negate latitude and/or longitude in place
    ///
    /// Used for mirroring a position into the opposite hemisphere.
    pub fn flip(&mut self, flip_lat: bool, flip_lng: bool) {
        if flip_lat {
            self.lat = -self.lat;
        }
        if flip_lng {
            self.lng = -self.lng;
        }
    }

    /// Non-mutating variant of [`GeoPoint::flip`]
    pub fn flipped(&self, flip_lat: bool, flip_lng: bool) -> Self {
        let mut point = self.clone();
        point.flip(flip_lat, flip_lng);
        point
    }

    /// Render this point with an explicit template
    ///
    /// See [`crate::format`] for the template grammar.
    pub fn to_string_with(&self, template: &str) -> String {
        crate::format::format_coordinates(template, self.lat, self.lng)
    }

    /// Build a derived point that shares this point's radius
    pub(crate) fn derive(&self, lat: f64, lng: f64) -> Self {
        Self {
            radius: self.radius,
            ..Self::new(lat, lng)
        }
    }

    /// Copy of this point with only the coordinates kept
    pub(crate) fn coordinates(&self) -> Self {
        Self::new(self.lat, self.lng)
    }
}

fn normalize_lng(lng: f64) -> f64 {
    // in-range values would only pick up rounding noise from the formula
    if lng.abs() < 180.0 {
        return lng;
    }

    let boundary = if lng % 180.0 != 0.0 { 1.0 } else { -1.0 };
    let sign = if lng < 0.0 { -1.0 } else { 1.0 };
    boundary * sign * ((lng.abs() + 180.0) % 360.0 - 180.0)
}

impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.lat == other.lat && self.lng == other.lng && self.radius() == other.radius()
    }
}

impl fmt::Display for GeoPoint {
    /// Renders with the attached template, or [`crate::format::DEFAULT_TEMPLATE`]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let template = self.format().unwrap_or(crate::format::DEFAULT_TEMPLATE);
        crate::format::write_coordinates(f, template, self.lat, self.lng)
    }
}
