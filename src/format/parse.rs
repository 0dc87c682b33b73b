use crate::format::token::{Axis, Token, Unit};
use regex::Captures;

/// Build the regex source matching strings rendered with `tokens`
///
/// Each placeholder becomes exactly one capture group, in token order.
/// Matching is case-insensitive and tolerates leading whitespace.
pub fn pattern(tokens: &[Token]) -> String {
    let mut pattern = String::from(r"(?i)^\s*");
    for token in tokens {
        match token {
            Token::Literal(text) => pattern.push_str(&regex::escape(text)),
            Token::Field {
                width, precision, ..
            } => {
                pattern.push('(');
                match width {
                    0 => pattern.push_str("[0-9]+"),
                    width => pattern.push_str(&format!("[0-9]{{{width},}}")),
                }
                if *precision > 0 {
                    pattern.push_str(&format!(r"\.[0-9]{{{precision}}}"));
                }
                pattern.push(')');
            }
            Token::Cardinal {
                axis: Axis::Lat, ..
            } => pattern.push_str("([NS])"),
            Token::Cardinal {
                axis: Axis::Lng, ..
            } => pattern.push_str("([EW])"),
        }
    }
    pattern
}

/// Decimal degrees accumulated for one axis
#[derive(Default)]
struct AxisSum {
    value: f64,
    negative: Option<bool>,
}

impl AxisSum {
    fn signed(&self) -> f64 {
        if self.negative == Some(true) {
            -self.value
        } else {
            self.value
        }
    }
}

/// Turn the captures of a [`pattern`] match into `(lat, lng)` in degrees
///
/// Fields of an axis are summed (minutes count 1/60). The first cardinal
/// letter of an axis decides its sign; without one the axis is positive.
pub fn coordinates(tokens: &[Token], captures: &Captures<'_>) -> (f64, f64) {
    let mut lat = AxisSum::default();
    let mut lng = AxisSum::default();

    let placeholders = tokens.iter().filter(|t| !matches!(t, Token::Literal(_)));
    for (index, token) in placeholders.enumerate() {
        let text = captures.get(index + 1).map_or("", |m| m.as_str());
        match token {
            Token::Literal(_) => {}
            Token::Field { axis, unit, .. } => {
                // the pattern only captures ASCII decimals, which always parse
                let value: f64 = text.parse().unwrap_or_default();
                let degrees = match unit {
                    Unit::Degrees => value,
                    Unit::Minutes => value / 60.0,
                };
                let sum = match axis {
                    Axis::Lat => &mut lat,
                    Axis::Lng => &mut lng,
                };
                sum.value += degrees;
            }
            Token::Cardinal { axis, inverted } => {
                let southern_or_western =
                    text.eq_ignore_ascii_case("S") || text.eq_ignore_ascii_case("W");
                let sum = match axis {
                    Axis::Lat => &mut lat,
                    Axis::Lng => &mut lng,
                };
                sum.negative.get_or_insert(southern_or_western != *inverted);
            }
        }
    }

    (lat.signed(), lng.signed())
}
