//! Hex colors used to fill tab and space blocks

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors that can occur when parsing a hex color
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("expected 6 hex digits, got {0} characters in '{1}'")]
    Length(usize, String),
    #[error("invalid hex digit '{digit}' in '{color}'")]
    Digit { digit: char, color: String },
}

/// A six digit RGB color written without the leading `#`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexColor(pub(crate) String);

impl HexColor {
    pub fn new(value: &str) -> Result<Self, ColorError> {
        let char_count = value.chars().count();
        if char_count != 6 {
            return Err(ColorError::Length(char_count, value.to_string()));
        }
        if let Some(digit) = value.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorError::Digit {
                digit,
                color: value.to_string(),
            });
        }
        Ok(Self(value.to_string()))
    }

    /// The digits without `#`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Inline style for an SVG element, e.g. `fill:#586e75`
    pub fn fill_style(&self) -> String {
        format!("fill:{}", self)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
