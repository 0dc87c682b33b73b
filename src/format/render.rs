use crate::format::token::{Axis, Token, Unit};
use std::fmt::{self, Write};

/// Rounded absolute value and sign of one axis
///
/// Every token of an axis renders from the same rounded value, so a
/// degrees field can never disagree with the minutes field next to it.
struct AxisValue {
    abs: f64,
    negative: bool,
}

impl AxisValue {
    fn new(value: f64, axis: Axis, tokens: &[Token]) -> Self {
        let scale = resolution(axis, tokens);
        let rounded = (value * scale).round() / scale;
        Self {
            abs: rounded.abs(),
            negative: rounded < 0.0,
        }
    }
}

/// Number of steps per degree needed by the finest field of `axis`
fn resolution(axis: Axis, tokens: &[Token]) -> f64 {
    let mut minutes = None;
    let mut degrees = 0;
    for token in tokens {
        if let Token::Field {
            axis: a,
            unit,
            precision,
            ..
        } = token
        {
            if *a != axis {
                continue;
            }
            match unit {
                Unit::Minutes => minutes = Some(minutes.unwrap_or(0).max(*precision)),
                Unit::Degrees => degrees = degrees.max(*precision),
            }
        }
    }

    match minutes {
        Some(precision) => 60.0 * 10f64.powi(precision as i32),
        None => 10f64.powi(degrees as i32),
    }
}

/// Write `value` with its integer part zero-padded to `width` and
/// `precision` fractional digits
fn write_fixed<W: Write>(w: &mut W, value: f64, width: usize, precision: usize) -> fmt::Result {
    let scale = 10u64.pow(precision as u32);
    let scaled = (value * scale as f64).round() as u64;
    write!(w, "{:0width$}", scaled / scale)?;
    if precision > 0 {
        write!(w, ".{:0precision$}", scaled % scale)?;
    }
    Ok(())
}

/// Render a coordinate pair through a token list
pub fn write_tokens<W: Write>(w: &mut W, tokens: &[Token], lat: f64, lng: f64) -> fmt::Result {
    let lat = AxisValue::new(lat, Axis::Lat, tokens);
    let lng = AxisValue::new(lng, Axis::Lng, tokens);

    for token in tokens {
        match token {
            Token::Literal(text) => w.write_str(text)?,
            Token::Field {
                axis,
                unit,
                width,
                precision,
            } => {
                let value = match axis {
                    Axis::Lat => &lat,
                    Axis::Lng => &lng,
                };
                match unit {
                    Unit::Degrees if *precision == 0 => {
                        write!(w, "{:0width$}", value.abs.floor() as u64, width = *width)?
                    }
                    Unit::Degrees => write_fixed(w, value.abs, *width, *precision)?,
                    Unit::Minutes => write_fixed(w, value.abs.fract() * 60.0, *width, *precision)?,
                }
            }
            Token::Cardinal { axis, inverted } => {
                let (value, positive, negative) = match axis {
                    Axis::Lat => (&lat, 'N', 'S'),
                    Axis::Lng => (&lng, 'E', 'W'),
                };
                let letter = if value.negative != *inverted { negative } else { positive };
                w.write_char(letter)?;
            }
        }
    }

    Ok(())
}

/// Render a coordinate pair through a token list into a new `String`
pub fn to_string(tokens: &[Token], lat: f64, lng: f64) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_tokens(&mut out, tokens, lat, lng);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::token::tokenize;

    fn render(template: &str, lat: f64, lng: f64) -> String {
        to_string(&tokenize(template), lat, lng)
    }

    #[test]
    fn test_degrees_and_minutes() {
        assert_eq!(render("%yd2 %ym2.1", 51.4778, 0.0), "51 28.7");
        assert_eq!(render("%xd3 %xm2", -0.0015, -0.0015), "000 00");
    }

    #[test]
    fn test_no_width_means_no_padding() {
        assert_eq!(render("%yd %ym", 5.5, 0.0), "5 30");
        assert_eq!(render("%xd", 123.0, 123.0), "123");
    }

    #[test]
    fn test_width_never_truncates() {
        assert_eq!(render("%xd2", 0.0, 170.0), "170");
    }

    #[test]
    fn test_decimal_degrees() {
        assert_eq!(render("%yd2.4", 7.123_456, 0.0), "07.1235");
        assert_eq!(render("%xd3.2", 0.0, -12.5), "012.50");
    }

    #[test]
    fn test_degrees_alone_round() {
        assert_eq!(render("%yd", 51.9, 0.0), "52");
        assert_eq!(render("%yd", 51.4, 0.0), "51");
    }

    #[test]
    fn test_minutes_carry_into_degrees() {
        // 51.99166 is 51°59.5', not 52°59.5'
        assert_eq!(render("%yd2°%ym2.1'", 51.991_66, 0.0), "51°59.5'");
        // 51.99999 rounds up to a whole degree
        assert_eq!(render("%yd2°%ym2.1'", 51.999_99, 0.0), "52°00.0'");
    }

    #[test]
    fn test_cardinals() {
        assert_eq!(render("%yc %xc", 10.0, 20.0), "N E");
        assert_eq!(render("%yc %xc", -10.0, -20.0), "S W");
        assert_eq!(render("%yC %xC", 10.0, -20.0), "S E");
        assert_eq!(render("%yc", 0.0, 0.0), "N");
    }

    #[test]
    fn test_cardinal_follows_rounding() {
        // rounds to 0.0 at one decimal of minutes, so no southern hemisphere
        assert_eq!(render("%yd2°%ym2.1'%yc", -0.0001, 0.0), "00°00.0'N");
        assert_eq!(render("%yd2°%ym2.1'%yc", -0.005, 0.0), "00°00.3'S");
    }

    #[test]
    fn test_literals_pass_through() {
        assert_eq!(render("lat=%yd, 100%", 1.0, 0.0), "lat=1, 100%");
        assert_eq!(render("", 1.0, 2.0), "");
    }
}
