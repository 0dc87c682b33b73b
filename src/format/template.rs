use crate::GeoPoint;
use crate::error::{Error, Result};
use crate::format::token::{Token, tokenize};
use crate::format::{parse, render};
use regex::Regex;
use std::fmt;

/// A compiled coordinate template
///
/// Compiling once and reusing the template avoids rebuilding the matching
/// regex for every parsed string.
///
/// # Example
///
/// ```
/// use sphere_nav::{GeoPoint, Template};
///
/// let template = Template::new("%yd2.2%yc %xd3.2%xc").unwrap();
/// let point = GeoPoint::new(-33.8568, 151.2153);
///
/// let text = template.render(&point);
/// assert_eq!(text, "33.86S 151.22E");
///
/// let parsed = template.parse(&text).unwrap();
/// assert_eq!(parsed.lat(), -33.86);
/// assert_eq!(parsed.lng(), 151.22);
/// ```
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
    tokens: Vec<Token>,
    regex: Regex,
}

impl Template {
    /// Compile a template
    pub fn new(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let tokens = tokenize(&source);
        let pattern = parse::pattern(&tokens);
        log::debug!("compiled coordinate template {source:?} to {pattern:?}");
        let regex = Regex::new(&pattern)?;

        Ok(Self {
            source,
            tokens,
            regex,
        })
    }

    /// The template string this was compiled from
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Render the coordinates of a point
    pub fn render(&self, point: &GeoPoint) -> String {
        render::to_string(&self.tokens, point.lat(), point.lng())
    }

    /// Parse a string rendered with this template
    ///
    /// Returns `None` if the string does not match. The resulting point
    /// carries this template as its display format.
    pub fn parse(&self, input: &str) -> Option<GeoPoint> {
        self.try_parse(input).ok()
    }

    /// Like [`Template::parse`], but reports why parsing failed
    pub fn try_parse(&self, input: &str) -> Result<GeoPoint> {
        let Some(captures) = self.regex.captures(input) else {
            log::debug!("{input:?} does not match coordinate template {:?}", self.source);
            return Err(Error::NoMatch {
                input: input.to_string(),
                template: self.source.clone(),
            });
        };

        let (lat, lng) = parse::coordinates(&self.tokens, &captures);
        Ok(GeoPoint::new(lat, lng).with_format(self.source.clone()))
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
