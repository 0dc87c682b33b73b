use crate::types::GeoPoint;
use crate::utils::angle::wrap_180;
use std::fmt;

/// Geographic rectangle between a southwest and a northeast corner
///
/// Longitudes may wrap through the ±180° antimeridian: a box whose west edge
/// lies east of its east edge (e.g. `170°` to `-170°`) covers the 20° strip
/// around the antimeridian, not the 340° complement.
///
/// Bounds without corners are empty. They contain nothing and turn into a
/// degenerate box on the first [`GeoBounds::extend`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoBounds {
    corners: Option<Corners>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawCorners", into = "RawCorners"))]
struct Corners {
    sw: GeoPoint,
    ne: GeoPoint,
    crosses_antimeridian: bool,
}

/// Wire form of [`Corners`]
///
/// The crossing flag is derived from the corners and never read from input.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawCorners {
    sw: GeoPoint,
    ne: GeoPoint,
}

#[cfg(feature = "serde")]
impl From<RawCorners> for Corners {
    fn from(raw: RawCorners) -> Self {
        Corners::new(raw.sw.coordinates(), raw.ne.coordinates())
    }
}

#[cfg(feature = "serde")]
impl From<Corners> for RawCorners {
    fn from(corners: Corners) -> Self {
        RawCorners {
            sw: corners.sw,
            ne: corners.ne,
        }
    }
}

/// Width and height of a [`GeoBounds`] in degrees
///
/// Unlike a [`GeoPoint`] the longitude extent is not normalized: a box
/// covering 200° of longitude reports `lng == 200.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub lat: f64,
    pub lng: f64,
}

impl Corners {
    fn new(sw: GeoPoint, ne: GeoPoint) -> Self {
        // literal rule, including its quirks at exactly ±180
        let crosses_antimeridian =
            ((sw.lng() == -180.0) ^ (ne.lng() == 180.0)) || sw.lng() > ne.lng();
        Self {
            sw,
            ne,
            crosses_antimeridian,
        }
    }

    fn contains_lat(&self, lat: f64) -> bool {
        self.sw.lat() <= lat && lat <= self.ne.lat()
    }

    fn contains_lng(&self, lng: f64) -> bool {
        self.lng_intervals()
            .into_iter()
            .flatten()
            .any(|(west, east)| west <= lng && lng <= east)
    }

    /// Longitude ranges accepted by `contains_lng`, as plain intervals
    fn lng_intervals(&self) -> [Option<(f64, f64)>; 2] {
        let (west, east) = (self.sw.lng(), self.ne.lng());
        if self.crosses_antimeridian {
            [Some((west, 180.0)), Some((-180.0, east))]
        } else {
            [Some((west, east)), None]
        }
    }

    fn center(&self) -> GeoPoint {
        let (west, east) = (self.sw.lng(), self.ne.lng());
        let lng = if self.crosses_antimeridian {
            (360.0 - west + east) / 2.0 + west
        } else {
            (west + east) / 2.0
        };
        GeoPoint::new((self.sw.lat() + self.ne.lat()) / 2.0, lng)
    }

    fn span(&self) -> Span {
        let wrap = if self.crosses_antimeridian { 360.0 } else { 0.0 };
        Span {
            lat: self.ne.lat() - self.sw.lat(),
            lng: self.ne.lng() - self.sw.lng() + wrap,
        }
    }
}

impl GeoBounds {
    /// Bounds without corners
    pub fn empty() -> Self {
        Self { corners: None }
    }

    /// Create bounds from optional corners
    ///
    /// With a single corner the bounds collapse onto that point. Only the
    /// coordinates of the corners are kept.
    pub fn new(sw: Option<&GeoPoint>, ne: Option<&GeoPoint>) -> Self {
        let corners = match (sw, ne) {
            (Some(sw), Some(ne)) => Some(Corners::new(sw.coordinates(), ne.coordinates())),
            (Some(point), None) | (None, Some(point)) => {
                Some(Corners::new(point.coordinates(), point.coordinates()))
            }
            (None, None) => None,
        };
        Self { corners }
    }

    /// Create bounds from both corners
    pub fn from_corners(sw: &GeoPoint, ne: &GeoPoint) -> Self {
        Self::new(Some(sw), Some(ne))
    }

    /// Create the smallest bounds enclosing a slice of points
    ///
    /// Returns `None` if the slice is empty.
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let (first, rest) = points.split_first()?;

        let mut bounds = Self::from(first);
        for point in rest {
            bounds.extend(point);
        }
        Some(bounds)
    }

    pub fn south_west(&self) -> Option<&GeoPoint> {
        self.corners.as_ref().map(|c| &c.sw)
    }

    pub fn north_east(&self) -> Option<&GeoPoint> {
        self.corners.as_ref().map(|c| &c.ne)
    }

    /// Whether the longitude range wraps through ±180°
    ///
    /// Always `false` for empty bounds.
    pub fn crosses_antimeridian(&self) -> bool {
        self.corners.as_ref().is_some_and(|c| c.crosses_antimeridian)
    }

    /// Whether the bounds have corners at all
    pub fn is_valid(&self) -> bool {
        self.corners.is_some()
    }

    /// Whether the bounds have no corners or an inverted latitude range
    ///
    /// Crossing the antimeridian never makes bounds empty.
    pub fn is_empty(&self) -> bool {
        match &self.corners {
            Some(c) => c.ne.lat() < c.sw.lat(),
            None => true,
        }
    }

    /// Check whether a point lies inside the bounds (edges included)
    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.corners
            .as_ref()
            .is_some_and(|c| c.contains_lat(point.lat()) && c.contains_lng(point.lng()))
    }

    /// Center of the bounds, accounting for antimeridian wraparound
    ///
    /// Returns `None` for empty bounds.
    pub fn center(&self) -> Option<GeoPoint> {
        self.corners.as_ref().map(Corners::center)
    }

    /// Extent of the bounds in degrees, zero for empty bounds
    pub fn span(&self) -> Span {
        self.corners.as_ref().map(Corners::span).unwrap_or_default()
    }

    /// Extend bounds to include a point
    ///
    /// Grows the box to the smallest box enclosing both the old box and the
    /// point. A longitude outside the current range is reached by growing
    /// toward whichever side is closer, which may make the box wrap through
    /// the antimeridian. If the point is already inside, no change is made.
    pub fn extend(&mut self, point: &GeoPoint) {
        let Some(c) = &self.corners else {
            *self = Self::from(point);
            return;
        };

        let point = point.coordinates();
        let south = c.sw.lat().min(point.lat());
        let north = c.ne.lat().max(point.lat());
        let (mut west, mut east) = (c.sw.lng(), c.ne.lng());

        if !c.contains_lng(point.lng()) {
            let offset = wrap_180(point.lng() - c.center().lng());
            if offset <= 0.0 {
                // a west edge on the antimeridian is spelled +180
                west = if point.lng() == -180.0 { 180.0 } else { point.lng() };
            } else {
                // an east edge on the antimeridian is spelled -180
                east = if point.lng() == 180.0 { -180.0 } else { point.lng() };
            }
        }

        self.corners = Some(Corners::new(
            GeoPoint::new(south, west),
            GeoPoint::new(north, east),
        ));
    }

    /// Check whether two bounds share at least one point
    ///
    /// Consistent with [`GeoBounds::contains`]: the bounds intersect iff some
    /// longitude range accepted by one overlaps a range accepted by the other.
    pub fn intersects(&self, other: &GeoBounds) -> bool {
        let (Some(a), Some(b)) = (&self.corners, &other.corners) else {
            return false;
        };

        if a.ne.lat() < b.sw.lat() || b.ne.lat() < a.sw.lat() {
            return false;
        }

        a.lng_intervals().into_iter().flatten().any(|(aw, ae)| {
            b.lng_intervals()
                .into_iter()
                .flatten()
                .any(|(bw, be)| aw <= be && bw <= ae)
        })
    }

    /// Render both corners with an explicit template, separated by `", "`
    ///
    /// Empty bounds render as an empty string.
    pub fn to_string_with(&self, template: &str) -> String {
        match &self.corners {
            Some(c) => format!("{}, {}", c.sw.to_string_with(template), c.ne.to_string_with(template)),
            None => String::new(),
        }
    }
}

impl From<&GeoPoint> for GeoBounds {
    fn from(point: &GeoPoint) -> Self {
        Self::new(Some(point), None)
    }
}

impl From<GeoPoint> for GeoBounds {
    fn from(point: GeoPoint) -> Self {
        Self::from(&point)
    }
}

impl<'a> Extend<&'a GeoPoint> for GeoBounds {
    fn extend<I: IntoIterator<Item = &'a GeoPoint>>(&mut self, iter: I) {
        for point in iter {
            GeoBounds::extend(self, point);
        }
    }
}

impl Extend<GeoPoint> for GeoBounds {
    fn extend<I: IntoIterator<Item = GeoPoint>>(&mut self, iter: I) {
        for point in iter {
            GeoBounds::extend(self, &point);
        }
    }
}

impl FromIterator<GeoPoint> for GeoBounds {
    fn from_iter<I: IntoIterator<Item = GeoPoint>>(iter: I) -> Self {
        let mut bounds = Self::empty();
        Extend::extend(&mut bounds, iter);
        bounds
    }
}

impl fmt::Display for GeoBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.corners {
            Some(c) => write!(f, "{}, {}", c.sw, c.ne),
            None => Ok(()),
        }
    }
}
