//! Error type for color parsing

use std::fmt;

/// Error type for parsing color strings.
///
/// Returned by [`Srgb::from_str`](std::str::FromStr::from_str) when the
/// input is not a recognized color notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(char),
    /// A channel in `rgb(r, g, b)` notation is not an integer in 0..=255
    InvalidChannel(String),
    /// Input matches none of the supported notations
    UnknownFormat(String),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 characters)")
            }
            ParseColorError::InvalidHex(c) => {
                write!(f, "invalid hex character: {:?}", c)
            }
            ParseColorError::InvalidChannel(channel) => {
                write!(f, "invalid rgb channel: {:?} (expected 0-255)", channel)
            }
            ParseColorError::UnknownFormat(input) => {
                write!(f, "unrecognized color format: {:?}", input)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}
