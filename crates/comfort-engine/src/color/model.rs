//! The color capability the scoring engine consumes.

use super::lab::{Lab, Lch};
use super::linear_rgb::LinearRgb;
use super::srgb::Srgb;

/// What the engine needs to know about a color.
///
/// The contrast and comfort scorers are generic over this trait, so any
/// colorimetry implementation can be plugged in. [`Srgb`] implements it with
/// the WCAG luminance formula and CIE Lab (D65).
///
/// Implementors provide the three required methods; [`chroma`](Self::chroma),
/// [`hue`](Self::hue) and [`lightness`](Self::lightness) are derived from
/// [`lab_components`](Self::lab_components).
pub trait ColorModel {
    /// WCAG relative luminance in 0.0..=1.0.
    fn luminance(&self) -> f64;

    /// CIE Lab components `(L, a, b)`.
    fn lab_components(&self) -> (f64, f64, f64);

    /// Whether the color is a usable value.
    fn is_valid(&self) -> bool;

    /// Lab lightness (0.0..=100.0).
    fn lightness(&self) -> f64 {
        self.lab_components().0
    }

    /// Lab chroma, `hypot(a, b)`.
    fn chroma(&self) -> f64 {
        let (_, a, b) = self.lab_components();
        a.hypot(b)
    }

    /// Lab hue angle in degrees, `None` for achromatic colors.
    fn hue(&self) -> Option<f64> {
        let (l, a, b) = self.lab_components();
        Lab::new(l, a, b).hue()
    }
}

impl Srgb {
    /// Convert to CIE Lab (D65).
    pub fn to_lab(self) -> Lab {
        Lab::from(LinearRgb::from(self))
    }

    /// Convert to CIE LCh(ab).
    pub fn to_lch(self) -> Lch {
        self.to_lab().to_lch()
    }
}

impl ColorModel for Srgb {
    fn luminance(&self) -> f64 {
        LinearRgb::from(*self).relative_luminance()
    }

    fn lab_components(&self) -> (f64, f64, f64) {
        let lab = self.to_lab();
        (lab.l, lab.a, lab.b)
    }

    fn is_valid(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }
}

impl<C: ColorModel + ?Sized> ColorModel for &C {
    fn luminance(&self) -> f64 {
        (**self).luminance()
    }

    fn lab_components(&self) -> (f64, f64, f64) {
        (**self).lab_components()
    }

    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }
}
