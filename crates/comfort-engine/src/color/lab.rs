//! CIE L\*a\*b\* and its cylindrical LCh form
//!
//! Lab separates lightness from chromaticity, which is what the comfort
//! factors need: chroma (how vivid a color is) and hue angle (where it sits
//! on the color wheel) are read off the a/b plane.
//!
//! Reference white is D65, matching sRGB.

use super::linear_rgb::LinearRgb;

/// D65 reference white (Y normalized to 1.0)
const WHITE_X: f64 = 0.95047;
const WHITE_Y: f64 = 1.0;
const WHITE_Z: f64 = 1.08883;

/// CIE epsilon (216/24389) and the slope of the linear segment (kappa/116).
const EPSILON: f64 = 0.008856452;
const LINEAR_SLOPE: f64 = 7.787037;
const LINEAR_OFFSET: f64 = 4.0 / 29.0;

/// Chroma below this (after rounding to 4 decimals) has no meaningful hue.
const ACHROMATIC_CHROMA: f64 = 0.5e-4;

/// A color in CIE L\*a\*b\* (D65).
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f64,
    /// Green-red axis, roughly -128..=128 for sRGB colors
    pub a: f64,
    /// Blue-yellow axis, roughly -128..=128 for sRGB colors
    pub b: f64,
}

/// A color in CIE LCh(ab), the polar form of [`Lab`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lch {
    /// Lightness, identical to [`Lab::l`]
    pub l: f64,
    /// Chroma: distance from the neutral axis, `hypot(a, b)`
    pub c: f64,
    /// Hue angle in degrees, 0.0..360.0. `None` for achromatic colors.
    pub h: Option<f64>,
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        LINEAR_SLOPE * t + LINEAR_OFFSET
    }
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Chroma (colorfulness): Euclidean distance from the neutral axis.
    #[inline]
    pub fn chroma(self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Hue angle in degrees (0.0..360.0), or `None` when the color is
    /// achromatic and the angle carries no information.
    ///
    /// ```
    /// use comfort_engine::Lab;
    ///
    /// assert_eq!(Lab::new(50.0, 0.0, 0.0).hue(), None);
    /// let h = Lab::new(50.0, 0.0, -20.0).hue().unwrap();
    /// assert!((h - 270.0).abs() < 1e-9);
    /// ```
    pub fn hue(self) -> Option<f64> {
        let chroma = self.chroma();
        if chroma.is_nan() || chroma < ACHROMATIC_CHROMA {
            return None;
        }
        let degrees = self.b.atan2(self.a).to_degrees();
        Some(if degrees < 0.0 { degrees + 360.0 } else { degrees })
    }

    /// Convert to the cylindrical LCh representation.
    pub fn to_lch(self) -> Lch {
        Lch {
            l: self.l,
            c: self.chroma(),
            h: self.hue(),
        }
    }
}

impl From<LinearRgb> for Lab {
    /// Convert from linear sRGB to Lab via CIE XYZ.
    fn from(rgb: LinearRgb) -> Self {
        // Linear sRGB to XYZ (D65), normalized by the reference white
        let x = (0.4124564 * rgb.r + 0.3575761 * rgb.g + 0.1804375 * rgb.b) / WHITE_X;
        let y = (0.2126729 * rgb.r + 0.7151522 * rgb.g + 0.0721750 * rgb.b) / WHITE_Y;
        let z = (0.0193339 * rgb.r + 0.1191920 * rgb.g + 0.9503041 * rgb.b) / WHITE_Z;

        let fx = lab_f(x);
        let fy = lab_f(y);
        let fz = lab_f(z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Lab> for Lch {
    fn from(lab: Lab) -> Self {
        lab.to_lch()
    }
}
