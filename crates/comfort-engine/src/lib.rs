//! comfort-engine: contrast and visual comfort scoring for color pairs
//!
//! This library answers two questions about a background/foreground pair:
//! does it pass WCAG contrast, and how comfortable is it to read for a long
//! time under a given room brightness.
//!
//! # Quick Start
//!
//! ```
//! use comfort_engine::{classify_contrast, score_comfort, AmbientToken, ComfortOptions, Srgb};
//!
//! let page: Srgb = "#f8f8f8".parse().unwrap();
//! let ink: Srgb = "#1e293b".parse().unwrap();
//!
//! let report = classify_contrast(&page, &ink);
//! assert_eq!(report.level.as_str(), "AAA");
//!
//! let options = ComfortOptions::new().ambient(AmbientToken::Bright);
//! let result = score_comfort(&page, &ink, &options);
//! assert!(result.score >= 80);
//! ```
//!
//! # Contrast
//!
//! [`contrast_ratio`] implements the WCAG 2.x formula over relative
//! luminance. [`ContrastLevel::classify`] buckets a ratio into
//! `FAIL` / `AA18` / `AA` / `AAA`, and [`readable_text_color`] picks a
//! black or white label for a swatch.
//!
//! # Comfort
//!
//! [`score_comfort`] starts every pair at 100 and subtracts six independent
//! penalties (see [`Factor`]). The result carries the per-factor
//! [`ComfortScoreBreakdown`] so callers can explain the score, and a
//! [`ComfortLabel`] bucket (`optimal`, `ok`, `harsh`).
//!
//! # Color Model
//!
//! All scoring goes through the [`ColorModel`] trait: relative luminance
//! plus CIE Lab (D65) components. [`Srgb`] implements it; other
//! representations can plug in by implementing the two required methods.
//!
//! | Space | Used For |
//! |-------|----------|
//! | **sRGB** | Parsing, hex output |
//! | **Linear RGB** | WCAG relative luminance |
//! | **CIE Lab / LCh** | Lightness, chroma and hue for the comfort factors |

pub mod color;
pub mod comfort;
pub mod contrast;


pub use color::{ColorModel, Lab, Lch, LinearRgb, ParseColorError, Srgb};
pub use comfort::{
    comfort_score, normalize_ambient, score_comfort, AmbientLevel, AmbientToken, BackgroundIndex,
    ComfortLabel, ComfortOptions, ComfortScoreBreakdown, ComfortScoreResult, ComfortScorer,
    Factor, DEFAULT_AMBIENT,
};
pub use contrast::{
    classify_contrast, contrast_ratio, readable_text_color, ContrastLevel, ContrastReport,
    TextColor,
};
