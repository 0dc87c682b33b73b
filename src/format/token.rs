/// Coordinate axis selected by a template token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// `y`
    Lat,
    /// `x`
    Lng,
}

/// Numeric field selected by a template token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// `d`
    Degrees,
    /// `m`
    Minutes,
}

/// One element of a compiled coordinate template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Text copied verbatim
    Literal(String),

    /// `%<axis><d|m>[width][.precision]`
    Field {
        axis: Axis,
        unit: Unit,
        width: usize,
        precision: usize,
    },

    /// `%<axis>c` (N/E for positive values) or `%<axis>C` (inverted)
    Cardinal { axis: Axis, inverted: bool },
}

impl Axis {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'y' => Some(Axis::Lat),
            'x' => Some(Axis::Lng),
            _ => None,
        }
    }
}

fn digit(c: Option<&char>) -> Option<usize> {
    c.and_then(|c| c.to_digit(10)).map(|d| d as usize)
}

/// Split a template into tokens
///
/// Anything that is not a complete placeholder, including a lone `%`, is
/// kept as literal text.
pub fn tokenize(template: &str) -> Vec<Token> {
    let chars: Vec<char> = template.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        match placeholder(&chars[i..]) {
            Some((token, len)) => {
                tokens.push(token);
                i += len;
            }
            None => {
                match tokens.last_mut() {
                    Some(Token::Literal(text)) => text.push(chars[i]),
                    _ => tokens.push(Token::Literal(chars[i].to_string())),
                }
                i += 1;
            }
        }
    }

    tokens
}

/// Try to read a placeholder at the start of `chars`
///
/// Returns the token and the number of characters it spans.
fn placeholder(chars: &[char]) -> Option<(Token, usize)> {
    if chars.first() != Some(&'%') {
        return None;
    }
    let axis = Axis::from_char(*chars.get(1)?)?;

    match chars.get(2)? {
        'c' => Some((Token::Cardinal { axis, inverted: false }, 3)),
        'C' => Some((Token::Cardinal { axis, inverted: true }, 3)),
        unit @ ('d' | 'm') => {
            let unit = if *unit == 'd' { Unit::Degrees } else { Unit::Minutes };
            let mut len = 3;

            let width = digit(chars.get(len));
            if width.is_some() {
                len += 1;
            }

            // a `.` only belongs to the token when a digit follows
            let mut precision = None;
            if chars.get(len) == Some(&'.') {
                precision = digit(chars.get(len + 1));
                if precision.is_some() {
                    len += 2;
                }
            }

            let token = Token::Field {
                axis,
                unit,
                width: width.unwrap_or(0),
                precision: precision.unwrap_or(0),
            };
            Some((token, len))
        }
        _ => None,
    }
}
