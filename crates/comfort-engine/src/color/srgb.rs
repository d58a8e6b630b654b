//! sRGB color type
//!
//! sRGB is the encoding every UI color arrives in. It applies a gamma curve
//! to linear light values, so it must be decoded before luminance math.

use std::str::FromStr;

use super::error::ParseColorError;

/// A color in sRGB color space.
///
/// Values are in the range 0.0..=1.0 (mapping to 0..255 for 8-bit).
/// This is the color type the scoring engine works with by default; it
/// implements [`ColorModel`](super::ColorModel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-encoded, 0.0..=1.0)
    pub r: f64,
    /// Green channel (gamma-encoded, 0.0..=1.0)
    pub g: f64,
    /// Blue channel (gamma-encoded, 0.0..=1.0)
    pub b: f64,
}

impl Srgb {
    /// Pure white (`#ffffff`).
    pub const WHITE: Srgb = Srgb {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Pure black (`#000000`).
    pub const BLACK: Srgb = Srgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Create a new Srgb color from float values.
    ///
    /// # Arguments
    /// * `r` - Red channel (0.0..=1.0)
    /// * `g` - Green channel (0.0..=1.0)
    /// * `b` - Blue channel (0.0..=1.0)
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from 8-bit unsigned integer values.
    ///
    /// # Example
    /// ```
    /// use comfort_engine::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Create an Srgb color from a byte array [R, G, B].
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    ///
    /// Rounds and clamps values to the 0..=255 range.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Format as a lowercase `#rrggbb` hex string.
    ///
    /// # Example
    /// ```
    /// use comfort_engine::Srgb;
    /// assert_eq!(Srgb::from_u8(127, 66, 255).to_hex(), "#7f42ff");
    /// ```
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Parse the body of `rgb(r, g, b)` notation (without the wrapper).
    fn parse_rgb_function(body: &str) -> Result<Self, ParseColorError> {
        let channels: Vec<&str> = body.split(',').map(str::trim).collect();
        if channels.len() != 3 {
            return Err(ParseColorError::UnknownFormat(format!("rgb({body})")));
        }

        let mut bytes = [0u8; 3];
        for (slot, channel) in bytes.iter_mut().zip(&channels) {
            *slot = channel
                .parse::<u8>()
                .map_err(|_| ParseColorError::InvalidChannel(channel.to_string()))?;
        }
        Ok(Self::from_bytes(bytes))
    }

    /// Parse `RGB` or `RRGGBB` hex digits (without the leading '#').
    fn parse_hex(digits: &str) -> Result<Self, ParseColorError> {
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidHex(bad));
        }

        // Every char is an ASCII hex digit past this point
        let nibbles: Vec<u8> = digits
            .chars()
            .filter_map(|c| c.to_digit(16))
            .map(|d| d as u8)
            .collect();

        match nibbles.as_slice() {
            // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
            [r, g, b] => Ok(Self::from_u8(r * 17, g * 17, b * 17)),
            [r1, r2, g1, g2, b1, b2] => Ok(Self::from_u8(
                (r1 << 4) | r2,
                (g1 << 4) | g2,
                (b1 << 4) | b2,
            )),
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

impl FromStr for Srgb {
    type Err = ParseColorError;

    /// Parse an sRGB color.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` / `RRGGBB` - standard 6-digit hex
    /// - `#RGB` / `RGB` - shorthand 3-digit hex (expands to RRGGBB)
    /// - `rgb(r, g, b)` - functional notation with 0..=255 integer channels
    /// - `white`, `black` - CSS keywords
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use comfort_engine::Srgb;
    ///
    /// let white: Srgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white, Srgb::WHITE);
    ///
    /// let red: Srgb = "rgb(255, 0, 0)".parse().unwrap();
    /// assert_eq!(red, "#f00".parse().unwrap());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();

        match lower.as_str() {
            "white" => return Ok(Self::WHITE),
            "black" => return Ok(Self::BLACK),
            _ => {}
        }

        if let Some(body) = lower
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::parse_rgb_function(body);
        }

        if let Some(digits) = lower.strip_prefix('#') {
            return Self::parse_hex(digits);
        }

        // Bare hex without '#': only plausible if every char is a hex digit
        // or the length matches a hex form.
        if lower.len() == 3 || lower.len() == 6 || lower.chars().all(|c| c.is_ascii_hexdigit()) {
            return Self::parse_hex(&lower);
        }

        Err(ParseColorError::UnknownFormat(s.to_string()))
    }
}
