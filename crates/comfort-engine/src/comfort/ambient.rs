//! Ambient light descriptors.
//!
//! The viewer's surroundings are described either by a coarse token or by
//! an explicit luminance proxy. [`normalize_ambient`] is the only place the
//! two forms are told apart.

use std::fmt;

/// Ambient luminance assumed when none is given ("normal office / indoor daylight").
pub const DEFAULT_AMBIENT: f64 = 0.75;

/// Named ambient light levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmbientToken {
    /// Night, lights off (0.1)
    Dark,
    /// Evening, low lamps (0.3)
    Dim,
    /// Overcast room (0.5)
    Medium,
    /// Sunlit room or outdoors (0.9)
    Bright,
}

impl AmbientToken {
    pub const ALL: [AmbientToken; 4] = [
        AmbientToken::Dark,
        AmbientToken::Dim,
        AmbientToken::Medium,
        AmbientToken::Bright,
    ];

    /// Luminance proxy for this token.
    pub fn luminance(self) -> f64 {
        match self {
            AmbientToken::Dark => 0.1,
            AmbientToken::Dim => 0.3,
            AmbientToken::Medium => 0.5,
            AmbientToken::Bright => 0.9,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AmbientToken::Dark => "dark",
            AmbientToken::Dim => "dim",
            AmbientToken::Medium => "medium",
            AmbientToken::Bright => "bright",
        }
    }

    /// Look up a token by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|token| token.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for AmbientToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ambient light level: a named token or an explicit 0..=1 luminance proxy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AmbientLevel {
    Named(AmbientToken),
    /// Explicit luminance proxy. Out-of-range values are clamped on use.
    Numeric(f64),
}

impl AmbientLevel {
    /// Parse a user-supplied ambient descriptor.
    ///
    /// Numbers become [`AmbientLevel::Numeric`], known tokens become
    /// [`AmbientLevel::Named`]. Anything else yields `None`, which the
    /// scorer treats as "not specified" and replaces with
    /// [`DEFAULT_AMBIENT`].
    ///
    /// ```
    /// use comfort_engine::{AmbientLevel, AmbientToken};
    ///
    /// assert_eq!(AmbientLevel::parse("Dark"), Some(AmbientLevel::Named(AmbientToken::Dark)));
    /// assert_eq!(AmbientLevel::parse("0.4"), Some(AmbientLevel::Numeric(0.4)));
    /// assert_eq!(AmbientLevel::parse("twilight"), None);
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Ok(value) = input.parse::<f64>() {
            if value.is_nan() {
                return None;
            }
            return Some(AmbientLevel::Numeric(value));
        }
        AmbientToken::from_name(input).map(AmbientLevel::Named)
    }
}

impl From<AmbientToken> for AmbientLevel {
    fn from(token: AmbientToken) -> Self {
        AmbientLevel::Named(token)
    }
}

impl From<f64> for AmbientLevel {
    fn from(value: f64) -> Self {
        AmbientLevel::Numeric(value)
    }
}

impl fmt::Display for AmbientLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmbientLevel::Named(token) => token.fmt(f),
            AmbientLevel::Numeric(value) => write!(f, "{value}"),
        }
    }
}

/// Reduce an optional ambient descriptor to a luminance proxy in 0.0..=1.0.
pub fn normalize_ambient(level: Option<AmbientLevel>) -> f64 {
    match level {
        None => DEFAULT_AMBIENT,
        Some(AmbientLevel::Named(token)) => token.luminance(),
        Some(AmbientLevel::Numeric(value)) if value.is_nan() => DEFAULT_AMBIENT,
        Some(AmbientLevel::Numeric(value)) => value.clamp(0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_table() {
        assert_eq!(normalize_ambient(Some(AmbientToken::Dark.into())), 0.1);
        assert_eq!(normalize_ambient(Some(AmbientToken::Dim.into())), 0.3);
        assert_eq!(normalize_ambient(Some(AmbientToken::Medium.into())), 0.5);
        assert_eq!(normalize_ambient(Some(AmbientToken::Bright.into())), 0.9);
    }

    #[test]
    fn test_default_when_missing() {
        assert_eq!(normalize_ambient(None), DEFAULT_AMBIENT);
        assert_eq!(DEFAULT_AMBIENT, 0.75);
    }

    #[test]
    fn test_numeric_passthrough_and_clamp() {
        assert_eq!(normalize_ambient(Some(0.42.into())), 0.42);
        assert_eq!(normalize_ambient(Some(1.7.into())), 1.0);
        assert_eq!(normalize_ambient(Some((-0.3).into())), 0.0);
        assert_eq!(normalize_ambient(Some(f64::INFINITY.into())), 1.0);
        assert_eq!(normalize_ambient(Some(f64::NAN.into())), DEFAULT_AMBIENT);
    }

    #[test]
    fn test_parse_tokens_case_insensitive() {
        for token in AmbientToken::ALL {
            let upper = token.as_str().to_uppercase();
            assert_eq!(AmbientLevel::parse(&upper), Some(AmbientLevel::Named(token)));
        }
        assert_eq!(
            AmbientLevel::parse("  dim "),
            Some(AmbientLevel::Named(AmbientToken::Dim))
        );
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(AmbientLevel::parse("0"), Some(AmbientLevel::Numeric(0.0)));
        assert_eq!(AmbientLevel::parse("2.5"), Some(AmbientLevel::Numeric(2.5)));
        assert_eq!(AmbientLevel::parse("NaN"), None);
    }

    #[test]
    fn test_unknown_token_falls_back_to_default() {
        assert_eq!(AmbientLevel::parse("foggy"), None);
        assert_eq!(normalize_ambient(AmbientLevel::parse("foggy")), DEFAULT_AMBIENT);
    }

    #[test]
    fn test_display() {
        assert_eq!(AmbientLevel::Named(AmbientToken::Bright).to_string(), "bright");
        assert_eq!(AmbientLevel::Numeric(0.25).to_string(), "0.25");
    }
}
