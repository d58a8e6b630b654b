//! Color types and the [`ColorModel`] capability
//!
//! The scoring engine never touches raw channel values. It asks a
//! [`ColorModel`] for luminance and Lab components; this module provides
//! the default implementation on [`Srgb`].
//!
//! # Color Spaces
//!
//! - **Srgb**: gamma-encoded input, parsed from hex / `rgb()` strings.
//! - **LinearRgb**: gamma-decoded light intensity, source of WCAG luminance.
//! - **Lab / Lch**: CIE L\*a\*b\* (D65) for lightness, chroma and hue.
//!
//! # Example
//!
//! ```
//! use comfort_engine::{ColorModel, Srgb};
//!
//! let violet: Srgb = "#7f42ff".parse().unwrap();
//! assert!(violet.luminance() > 0.1);
//! assert!(violet.chroma() > 50.0);
//! ```

mod error;
mod lab;
mod linear_rgb;
mod model;
mod srgb;

pub use error::ParseColorError;
pub use lab::{Lab, Lch};
pub use linear_rgb::LinearRgb;
pub use model::ColorModel;
pub use srgb::Srgb;
