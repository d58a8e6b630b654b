//! The six comfort factors.
//!
//! Each factor looks at the same precomputed [`PairMetrics`] and returns a
//! signed score delta (always <= 0). Factors never see each other's output.

use std::fmt;

use crate::color::ColorModel;
use crate::contrast::luminance_contrast;

/// Flat penalty for light-on-dark text.
pub(crate) const NEGATIVE_POLARITY_PENALTY: f64 = 10.0;
/// Scale of the ambient mismatch curve.
pub(crate) const AMBIENT_PENALTY_SCALE: f64 = 80.0;
/// Exponent of the ambient mismatch curve (> 1: large mismatches cost more).
pub(crate) const AMBIENT_PENALTY_EXPONENT: f64 = 1.3;
/// WCAG AA minimum for body text.
pub(crate) const CONTRAST_MIN: f64 = 4.5;
/// Penalty at contrast ratio 1.0.
pub(crate) const MAX_READABILITY_PENALTY: f64 = 70.0;
/// Ratio span over which the readability penalty ramps (4.5 down to 1.0).
const LOW_CONTRAST_SPAN: f64 = CONTRAST_MIN - 1.0;
pub(crate) const MAX_HARMONY_PENALTY: f64 = 20.0;
/// Both colors need more Lab chroma than this for harmony to apply.
pub(crate) const HARMONY_MIN_CHROMA: f64 = 20.0;
pub(crate) const MAX_VIBRANCY_PENALTY: f64 = 20.0;
/// Both colors need more Lab chroma than this to vibrate.
pub(crate) const VIBRANCY_MIN_CHROMA: f64 = 50.0;
/// Hue distance (degrees) above which saturated pairs count as opposing.
pub(crate) const VIBRANCY_MIN_HUE_DISTANCE: f64 = 150.0;
/// Lab lightness difference below which opposing hues vibrate.
pub(crate) const VIBRANCY_MAX_LIGHTNESS_DIFF: f64 = 50.0;
/// Ambient luminance below which blue light is penalized.
pub(crate) const NIGHT_AMBIENT: f64 = 0.3;
/// Foreground luminance above which blue light is penalized.
pub(crate) const BLUE_LIGHT_MIN_LUMINANCE: f64 = 0.3;
/// Cyan to royal blue, in Lab hue degrees (inclusive).
pub(crate) const BLUE_HUE_RANGE: (f64, f64) = (200.0, 260.0);
pub(crate) const BLUE_LIGHT_PENALTY: f64 = 5.0;

/// Shortest angular distance between two hues, in 0.0..=180.0.
///
/// An undefined hue (achromatic color) gives a distance of 0.
pub fn hue_distance(h1: Option<f64>, h2: Option<f64>) -> f64 {
    match (h1, h2) {
        (Some(h1), Some(h2)) if h1.is_finite() && h2.is_finite() => {
            let diff = (h1 - h2).abs() % 360.0;
            if diff > 180.0 {
                360.0 - diff
            } else {
                diff
            }
        }
        _ => 0.0,
    }
}

/// Perceptual data for one background/foreground pair, gathered once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairMetrics {
    pub bg_luminance: f64,
    pub fg_luminance: f64,
    pub bg_lightness: f64,
    pub fg_lightness: f64,
    pub bg_chroma: f64,
    pub fg_chroma: f64,
    pub bg_hue: Option<f64>,
    pub fg_hue: Option<f64>,
    /// Normalized ambient luminance proxy, 0.0..=1.0
    pub ambient: f64,
}

impl PairMetrics {
    /// Gather metrics for `background` and `foreground` under `ambient`.
    pub fn measure<B, F>(background: &B, foreground: &F, ambient: f64) -> Self
    where
        B: ColorModel + ?Sized,
        F: ColorModel + ?Sized,
    {
        Self {
            bg_luminance: background.luminance(),
            fg_luminance: foreground.luminance(),
            bg_lightness: background.lightness(),
            fg_lightness: foreground.lightness(),
            bg_chroma: background.chroma(),
            fg_chroma: foreground.chroma(),
            bg_hue: background.hue(),
            fg_hue: foreground.hue(),
            ambient,
        }
    }

    /// Light text on a dark surface.
    #[inline]
    pub fn is_negative_polarity(&self) -> bool {
        self.fg_luminance > self.bg_luminance
    }

    #[inline]
    pub fn contrast_ratio(&self) -> f64 {
        luminance_contrast(self.bg_luminance, self.fg_luminance)
    }

    #[inline]
    pub fn hue_distance(&self) -> f64 {
        hue_distance(self.bg_hue, self.fg_hue)
    }
}

/// One of the six penalty factors, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Factor {
    NegativePolarity,
    AmbientAdaptation,
    Readability,
    Harmony,
    Vibrancy,
    BlueLight,
}

impl Factor {
    /// All factors in evaluation order.
    pub const ALL: [Factor; 6] = [
        Factor::NegativePolarity,
        Factor::AmbientAdaptation,
        Factor::Readability,
        Factor::Harmony,
        Factor::Vibrancy,
        Factor::BlueLight,
    ];

    /// Stable camelCase key used in serialized breakdowns.
    pub fn key(self) -> &'static str {
        match self {
            Factor::NegativePolarity => "negativePolarity",
            Factor::AmbientAdaptation => "ambientAdaptation",
            Factor::Readability => "readability",
            Factor::Harmony => "harmony",
            Factor::Vibrancy => "vibrancy",
            Factor::BlueLight => "blueLight",
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Factor::NegativePolarity => "Negative Polarity",
            Factor::AmbientAdaptation => "Ambient Light Adaptation",
            Factor::Readability => "Readability",
            Factor::Harmony => "Color Harmony",
            Factor::Vibrancy => "Vibrating Edges",
            Factor::BlueLight => "Blue Light at Night",
        }
    }

    /// One-sentence explanation of what the factor penalizes.
    pub fn description(self) -> &'static str {
        match self {
            Factor::NegativePolarity => {
                "Light-on-dark text tends to be more fatiguing than dark-on-light."
            }
            Factor::AmbientAdaptation => {
                "Penalizes mismatch between the brightest element (text in dark mode, page in light mode) and the room's brightness."
            }
            Factor::Readability => "WCAG contrast ratio below the AA minimum of 4.5:1.",
            Factor::Harmony => {
                "Vivid colors far apart in hue or chroma clash with each other."
            }
            Factor::Vibrancy => {
                "Highly saturated, opposing hues with similar lightness cause visual noise."
            }
            Factor::BlueLight => {
                "Bright blues in dark environments are harder on the eyes than warm tones."
            }
        }
    }

    /// Signed score delta (<= 0) this factor contributes for `m`.
    pub fn penalty(self, m: &PairMetrics) -> f64 {
        let magnitude = match self {
            Factor::NegativePolarity => negative_polarity(m),
            Factor::AmbientAdaptation => ambient_adaptation(m),
            Factor::Readability => readability(m),
            Factor::Harmony => harmony(m),
            Factor::Vibrancy => vibrancy(m),
            Factor::BlueLight => blue_light(m),
        };
        // 0.0 - 0.0 keeps the sign positive for factors that do not apply
        0.0 - magnitude
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Each helper returns a penalty magnitude (>= 0); `Factor::penalty` negates.

fn negative_polarity(m: &PairMetrics) -> f64 {
    if m.is_negative_polarity() {
        NEGATIVE_POLARITY_PENALTY
    } else {
        0.0
    }
}

fn ambient_adaptation(m: &PairMetrics) -> f64 {
    // Glare comes from the text in dark mode and from the page in light mode
    let element = if m.is_negative_polarity() {
        m.fg_luminance
    } else {
        m.bg_luminance
    };
    let diff = (element - m.ambient).abs();
    AMBIENT_PENALTY_SCALE * diff.powf(AMBIENT_PENALTY_EXPONENT)
}

fn readability(m: &PairMetrics) -> f64 {
    let ratio = m.contrast_ratio();
    if ratio < CONTRAST_MIN {
        (CONTRAST_MIN - ratio) / LOW_CONTRAST_SPAN * MAX_READABILITY_PENALTY
    } else {
        0.0
    }
}

fn harmony(m: &PairMetrics) -> f64 {
    if m.bg_chroma <= HARMONY_MIN_CHROMA || m.fg_chroma <= HARMONY_MIN_CHROMA {
        return 0.0;
    }
    let h_diff = m.hue_distance() / 180.0;
    let c_diff = (m.bg_chroma - m.fg_chroma).abs() / (m.bg_chroma + m.fg_chroma);
    (0.7 * h_diff + 0.3 * c_diff) * MAX_HARMONY_PENALTY
}

fn vibrancy(m: &PairMetrics) -> f64 {
    let distance = m.hue_distance();
    let vibrates = m.bg_chroma > VIBRANCY_MIN_CHROMA
        && m.fg_chroma > VIBRANCY_MIN_CHROMA
        && distance > VIBRANCY_MIN_HUE_DISTANCE
        && (m.bg_lightness - m.fg_lightness).abs() < VIBRANCY_MAX_LIGHTNESS_DIFF;
    if vibrates {
        distance / 180.0 * MAX_VIBRANCY_PENALTY
    } else {
        0.0
    }
}

fn blue_light(m: &PairMetrics) -> f64 {
    if m.ambient >= NIGHT_AMBIENT {
        return 0.0;
    }
    let (start, end) = BLUE_HUE_RANGE;
    let is_blue = m.fg_hue.is_some_and(|h| (start..=end).contains(&h));
    if is_blue && m.fg_luminance > BLUE_LIGHT_MIN_LUMINANCE {
        BLUE_LIGHT_PENALTY
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> PairMetrics {
        PairMetrics {
            bg_luminance: 1.0,
            fg_luminance: 0.0,
            bg_lightness: 100.0,
            fg_lightness: 0.0,
            bg_chroma: 0.0,
            fg_chroma: 0.0,
            bg_hue: None,
            fg_hue: None,
            ambient: 0.75,
        }
    }

    #[test]
    fn test_hue_distance_wraps() {
        assert_eq!(hue_distance(Some(10.0), Some(350.0)), 20.0);
        assert_eq!(hue_distance(Some(350.0), Some(10.0)), 20.0);
        assert_eq!(hue_distance(Some(0.0), Some(180.0)), 180.0);
        assert_eq!(hue_distance(Some(40.0), Some(40.0)), 0.0);
        assert_eq!(hue_distance(Some(720.0), Some(0.0)), 0.0);
    }

    #[test]
    fn test_hue_distance_undefined_is_zero() {
        assert_eq!(hue_distance(None, Some(120.0)), 0.0);
        assert_eq!(hue_distance(Some(120.0), None), 0.0);
        assert_eq!(hue_distance(Some(f64::NAN), Some(120.0)), 0.0);
    }

    #[test]
    fn test_negative_polarity_is_flat() {
        let positive = metrics();
        assert_eq!(Factor::NegativePolarity.penalty(&positive), 0.0);

        let negative = PairMetrics {
            bg_luminance: 0.0,
            fg_luminance: 0.01,
            ..metrics()
        };
        assert_eq!(Factor::NegativePolarity.penalty(&negative), -10.0);

        // Equal luminance is not negative polarity
        let equal = PairMetrics {
            bg_luminance: 0.4,
            fg_luminance: 0.4,
            ..metrics()
        };
        assert_eq!(Factor::NegativePolarity.penalty(&equal), 0.0);
    }

    #[test]
    fn test_ambient_uses_background_in_positive_polarity() {
        let m = PairMetrics {
            ambient: 1.0,
            ..metrics()
        };
        assert_eq!(Factor::AmbientAdaptation.penalty(&m), 0.0);

        let m = PairMetrics {
            ambient: 0.0,
            ..metrics()
        };
        assert!((Factor::AmbientAdaptation.penalty(&m) + 80.0).abs() < 1e-12);
    }

    #[test]
    fn test_ambient_uses_foreground_in_negative_polarity() {
        let m = PairMetrics {
            bg_luminance: 0.0,
            fg_luminance: 0.5,
            ambient: 0.5,
            ..metrics()
        };
        assert_eq!(Factor::AmbientAdaptation.penalty(&m), 0.0);
    }

    #[test]
    fn test_ambient_curve_is_superlinear() {
        let at = |diff: f64| {
            let m = PairMetrics {
                bg_luminance: 1.0,
                ambient: 1.0 - diff,
                ..metrics()
            };
            -Factor::AmbientAdaptation.penalty(&m)
        };
        // Doubling the mismatch more than doubles the penalty
        assert!(at(0.4) > 2.0 * at(0.2));
        assert!((at(0.25) - 80.0 * 0.25f64.powf(1.3)).abs() < 1e-9);
    }

    #[test]
    fn test_readability_ramp() {
        // Identical luminance: ratio 1.0, full 70 point penalty
        let m = PairMetrics {
            bg_luminance: 0.3,
            fg_luminance: 0.3,
            ..metrics()
        };
        assert!((Factor::Readability.penalty(&m) + 70.0).abs() < 1e-9);

        // Black on white passes
        assert_eq!(Factor::Readability.penalty(&metrics()), 0.0);
    }

    #[test]
    fn test_readability_zero_at_exact_minimum() {
        // (L + 0.05) / 0.05 == 4.5  =>  L = 0.175
        let m = PairMetrics {
            bg_luminance: 0.0,
            fg_luminance: 0.175,
            ..metrics()
        };
        let ratio = m.contrast_ratio();
        let penalty = Factor::Readability.penalty(&m);
        if ratio >= CONTRAST_MIN {
            assert_eq!(penalty, 0.0);
        } else {
            assert!(penalty > -1e-9);
        }
    }

    #[test]
    fn test_harmony_gated_on_chroma() {
        let m = PairMetrics {
            bg_chroma: 20.0,
            fg_chroma: 90.0,
            bg_hue: Some(0.0),
            fg_hue: Some(180.0),
            ..metrics()
        };
        assert_eq!(Factor::Harmony.penalty(&m), 0.0);
    }

    #[test]
    fn test_harmony_formula() {
        let m = PairMetrics {
            bg_chroma: 30.0,
            fg_chroma: 90.0,
            bg_hue: Some(0.0),
            fg_hue: Some(90.0),
            ..metrics()
        };
        // (0.7 * 0.5 + 0.3 * 0.5) * 20 = 10
        assert!((Factor::Harmony.penalty(&m) + 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_vibrancy_requires_all_conditions() {
        let vibrating = PairMetrics {
            bg_lightness: 60.0,
            fg_lightness: 80.0,
            bg_chroma: 100.0,
            fg_chroma: 100.0,
            bg_hue: Some(0.0),
            fg_hue: Some(170.0),
            ..metrics()
        };
        let expected = -(170.0 / 180.0 * 20.0);
        assert!((Factor::Vibrancy.penalty(&vibrating) - expected).abs() < 1e-9);

        let low_chroma = PairMetrics {
            fg_chroma: 50.0,
            ..vibrating
        };
        assert_eq!(Factor::Vibrancy.penalty(&low_chroma), 0.0);

        let near_hues = PairMetrics {
            fg_hue: Some(150.0),
            ..vibrating
        };
        assert_eq!(Factor::Vibrancy.penalty(&near_hues), 0.0);

        let far_lightness = PairMetrics {
            fg_lightness: 110.0,
            ..vibrating
        };
        assert_eq!(Factor::Vibrancy.penalty(&far_lightness), 0.0);
    }

    #[test]
    fn test_blue_light_only_at_night() {
        let night_blue = PairMetrics {
            bg_luminance: 0.0,
            fg_luminance: 0.45,
            fg_hue: Some(247.0),
            ambient: 0.1,
            ..metrics()
        };
        assert_eq!(Factor::BlueLight.penalty(&night_blue), -5.0);

        let dusk = PairMetrics {
            ambient: 0.3,
            ..night_blue
        };
        assert_eq!(Factor::BlueLight.penalty(&dusk), 0.0);

        let dim_blue = PairMetrics {
            fg_luminance: 0.3,
            ..night_blue
        };
        assert_eq!(Factor::BlueLight.penalty(&dim_blue), 0.0);

        let gray = PairMetrics {
            fg_hue: None,
            ..night_blue
        };
        assert_eq!(Factor::BlueLight.penalty(&gray), 0.0);
    }

    #[test]
    fn test_blue_hue_range_inclusive() {
        for (hue, expected) in [(199.9, 0.0), (200.0, -5.0), (260.0, -5.0), (260.1, 0.0)] {
            let m = PairMetrics {
                bg_luminance: 0.0,
                fg_luminance: 0.5,
                fg_hue: Some(hue),
                ambient: 0.0,
                ..metrics()
            };
            assert_eq!(Factor::BlueLight.penalty(&m), expected, "hue {hue}");
        }
    }

    #[test]
    fn test_factor_keys_are_unique() {
        let mut keys: Vec<&str> = Factor::ALL.iter().map(|f| f.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Factor::ALL.len());
    }

    #[test]
    fn test_penalties_never_positive() {
        let cases = [
            metrics(),
            PairMetrics {
                bg_luminance: 0.2,
                fg_luminance: 0.25,
                bg_chroma: 80.0,
                fg_chroma: 60.0,
                bg_hue: Some(30.0),
                fg_hue: Some(250.0),
                bg_lightness: 50.0,
                fg_lightness: 55.0,
                ambient: 0.05,
            },
        ];
        for m in cases {
            for factor in Factor::ALL {
                assert!(factor.penalty(&m) <= 0.0, "{factor} positive for {m:?}");
            }
        }
    }
}
