//! WCAG contrast ratio and pass levels.
//!
//! The ratio is `(L_bright + 0.05) / (L_dark + 0.05)` over relative
//! luminance, giving 1.0 (identical luminance) up to 21.0 (black on white).

use std::fmt;

use crate::color::{ColorModel, Srgb};

/// Discrete WCAG pass level, ordered from worst to best.
///
/// Each level is keyed by the minimum ratio it requires. A ratio maps to
/// the highest level whose threshold it meets or exceeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContrastLevel {
    /// Below every threshold
    Fail,
    /// AA for large text (18pt / 14pt bold): ratio >= 3.0
    Aa18,
    /// AA for body text: ratio >= 4.5
    Aa,
    /// AAA for body text: ratio >= 7.0
    Aaa,
}

impl ContrastLevel {
    /// All levels, worst first.
    pub const ALL: [ContrastLevel; 4] = [
        ContrastLevel::Fail,
        ContrastLevel::Aa18,
        ContrastLevel::Aa,
        ContrastLevel::Aaa,
    ];

    /// Minimum contrast ratio this level requires.
    pub fn threshold(self) -> f64 {
        match self {
            ContrastLevel::Fail => 0.0,
            ContrastLevel::Aa18 => 3.0,
            ContrastLevel::Aa => 4.5,
            ContrastLevel::Aaa => 7.0,
        }
    }

    /// Map a contrast ratio to its level. Thresholds are inclusive.
    ///
    /// ```
    /// use comfort_engine::ContrastLevel;
    ///
    /// assert_eq!(ContrastLevel::classify(4.5), ContrastLevel::Aa);
    /// assert_eq!(ContrastLevel::classify(2.99), ContrastLevel::Fail);
    /// ```
    pub fn classify(ratio: f64) -> Self {
        Self::ALL
            .into_iter()
            .rev()
            .find(|level| ratio >= level.threshold())
            .unwrap_or(ContrastLevel::Fail)
    }

    /// Short display name (`FAIL`, `AA18`, `AA`, `AAA`).
    pub fn as_str(self) -> &'static str {
        match self {
            ContrastLevel::Fail => "FAIL",
            ContrastLevel::Aa18 => "AA18",
            ContrastLevel::Aa => "AA",
            ContrastLevel::Aaa => "AAA",
        }
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contrast ratio from two relative luminance values. Order does not matter.
#[inline]
pub fn luminance_contrast(l1: f64, l2: f64) -> f64 {
    let (bright, dark) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (bright + 0.05) / (dark + 0.05)
}

/// WCAG contrast ratio between two colors (1.0..=21.0).
///
/// Symmetric in its arguments. Colors are assumed valid.
pub fn contrast_ratio<A, B>(c1: &A, c2: &B) -> f64
where
    A: ColorModel + ?Sized,
    B: ColorModel + ?Sized,
{
    luminance_contrast(c1.luminance(), c2.luminance())
}

/// A contrast ratio together with its WCAG level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastReport {
    /// Contrast ratio, 1.0..=21.0
    pub ratio: f64,
    /// Highest level the ratio passes
    pub level: ContrastLevel,
}

/// Compute the contrast ratio between two colors and classify it.
///
/// ```
/// use comfort_engine::{classify_contrast, ContrastLevel, Srgb};
///
/// let report = classify_contrast(&Srgb::BLACK, &Srgb::WHITE);
/// assert!((report.ratio - 21.0).abs() < 1e-9);
/// assert_eq!(report.level, ContrastLevel::Aaa);
/// ```
pub fn classify_contrast<A, B>(c1: &A, c2: &B) -> ContrastReport
where
    A: ColorModel + ?Sized,
    B: ColorModel + ?Sized,
{
    let ratio = contrast_ratio(c1, c2);
    ContrastReport {
        ratio,
        level: ContrastLevel::classify(ratio),
    }
}

/// Label color for text drawn on top of a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor {
    White,
    Black,
}

impl TextColor {
    /// The color as an [`Srgb`] value.
    pub fn to_srgb(self) -> Srgb {
        match self {
            TextColor::White => Srgb::WHITE,
            TextColor::Black => Srgb::BLACK,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TextColor::White => "white",
            TextColor::Black => "black",
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick white or black, whichever is more legible on `background`.
///
/// White wins only when its contrast is strictly greater; ties go to black.
pub fn readable_text_color<C: ColorModel + ?Sized>(background: &C) -> TextColor {
    let luminance = background.luminance();
    let against_white = luminance_contrast(luminance, 1.0);
    let against_black = luminance_contrast(luminance, 0.0);
    if against_white > against_black {
        TextColor::White
    } else {
        TextColor::Black
    }
}
