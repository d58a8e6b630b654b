//! Linear RGB color type
//!
//! Linear RGB is the color space where light addition is physically accurate.
//! Relative luminance and the XYZ/Lab conversions start from here.

use super::srgb::Srgb;

/// WCAG / Rec. 709 luminance weights for linear R, G, B.
const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// IEC 61966-2-1 exact formula: sRGB to linear
#[inline]
pub(crate) fn srgb_to_linear(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// A color in linear RGB color space.
///
/// Values represent light intensity proportional to physical light power.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// WCAG relative luminance (0.0 = black, 1.0 = white).
    ///
    /// ```
    /// use comfort_engine::{LinearRgb, Srgb};
    ///
    /// let white = LinearRgb::from(Srgb::WHITE);
    /// assert!((white.relative_luminance() - 1.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn relative_luminance(self) -> f64 {
        let [wr, wg, wb] = LUMINANCE_WEIGHTS;
        wr * self.r + wg * self.g + wb * self.b
    }
}

impl From<Srgb> for LinearRgb {
    /// Convert from sRGB to linear RGB (gamma decode).
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test known gamma conversion values against the IEC 61966-2-1 formula.
    #[test]
    fn test_known_gamma_values() {
        let black = LinearRgb::from(Srgb::new(0.0, 0.0, 0.0));
        assert!(black.r.abs() < 1e-12);

        let white = LinearRgb::from(Srgb::new(1.0, 1.0, 1.0));
        assert!((white.r - 1.0).abs() < 1e-12);

        // sRGB 0.5 -> linear ~0.214
        // Exact: ((0.5 + 0.055) / 1.055)^2.4 = 0.214041...
        let mid = LinearRgb::from(Srgb::new(0.5, 0.5, 0.5));
        assert!(
            (mid.r - 0.214).abs() < 0.001,
            "sRGB 0.5 -> linear expected ~0.214, got {}",
            mid.r
        );
    }

    #[test]
    fn test_linear_segment_below_threshold() {
        // Values at or below 0.04045 use the linear toe, not the power curve
        assert!((srgb_to_linear(0.04) - 0.04 / 12.92).abs() < 1e-12);
    }

    #[test]
    fn test_primary_luminance_matches_weights() {
        let red = LinearRgb::from(Srgb::from_u8(255, 0, 0));
        let green = LinearRgb::from(Srgb::from_u8(0, 255, 0));
        let blue = LinearRgb::from(Srgb::from_u8(0, 0, 255));

        assert!((red.relative_luminance() - 0.2126).abs() < 1e-9);
        assert!((green.relative_luminance() - 0.7152).abs() < 1e-9);
        assert!((blue.relative_luminance() - 0.0722).abs() < 1e-9);
    }

    #[test]
    fn test_mid_gray_luminance() {
        // #808080 is the usual WCAG reference: ~0.2159
        let gray = LinearRgb::from(Srgb::from_u8(128, 128, 128));
        assert!((gray.relative_luminance() - 0.2159).abs() < 1e-3);
    }
}
