//! Coordinate templates
//!
//! A template is a string with placeholders that are replaced by fields of
//! a coordinate when rendering, and matched against when parsing:
//!
//! | Placeholder                  | Meaning                                     |
//! |------------------------------|---------------------------------------------|
//! | `%yd[W][.P]` / `%xd[W][.P]`  | latitude / longitude degrees                |
//! | `%ym[W][.P]` / `%xm[W][.P]`  | latitude / longitude minutes                |
//! | `%yc` / `%xc`                | `N`/`S` or `E`/`W`                          |
//! | `%yC` / `%xC`                | inverted cardinal letter                    |
//!
//! `W` is a single digit giving the minimum width of the integer part
//! (zero-padded) and `P` a single digit giving the number of fractional
//! digits. Both default to 0, meaning no padding and no fractional part.
//! Numeric fields always render the absolute value; the hemisphere is only
//! visible through a cardinal placeholder. All other characters are copied
//! verbatim.
//!
//! Each axis is rounded once to the finest resolution any of its fields
//! asks for, so `%yd2°%ym2.1'` renders 51.99166° as `51°59.5'`.
//!
//! Parsing accepts leading whitespace, ignores letter case and does not
//! require the input to end after the last placeholder.

mod parse;
mod render;
mod template;
mod token;

pub use template::Template;
pub use token::{Axis, Token, Unit};

use crate::GeoPoint;
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Template used when a point has no format of its own
///
/// Renders e.g. `51°28.7'N 000°00.1'W`.
pub const DEFAULT_TEMPLATE: &str = "%yd2°%ym2.1'%yc %xd3°%xm2.1'%xc";

pub(crate) fn write_coordinates<W: fmt::Write>(
    w: &mut W,
    template: &str,
    lat: f64,
    lng: f64,
) -> fmt::Result {
    render::write_tokens(w, &token::tokenize(template), lat, lng)
}

pub(crate) fn format_coordinates(template: &str, lat: f64, lng: f64) -> String {
    render::to_string(&token::tokenize(template), lat, lng)
}

impl GeoPoint {
    /// Parse a point from a string rendered with `template`
    ///
    /// Returns `None` if the string does not match the template. Compile the
    /// template with [`Template::new`] instead when parsing many strings.
    pub fn parse(input: &str, template: &str) -> Option<GeoPoint> {
        match Template::new(template) {
            Ok(template) => template.parse(input),
            Err(err) => {
                log::debug!("unusable coordinate template {template:?}: {err}");
                None
            }
        }
    }
}

impl FromStr for GeoPoint {
    type Err = Error;

    /// Parse a point rendered with [`DEFAULT_TEMPLATE`]
    fn from_str(s: &str) -> Result<Self> {
        Template::new(DEFAULT_TEMPLATE)?.try_parse(s)
    }
}
