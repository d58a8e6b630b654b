//! Comfort scoring options.
//!
//! This module provides the [`ComfortOptions`] struct for configuring
//! the viewing context of a comfort evaluation.

use super::ambient::{normalize_ambient, AmbientLevel};

/// Which of the two scored colors is the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackgroundIndex {
    /// The first color is the background, the second the foreground.
    #[default]
    First,
    /// The second color is the background, the first the foreground.
    Second,
}

impl BackgroundIndex {
    /// Map a 0/1 index to a variant. Other values yield `None`.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(BackgroundIndex::First),
            1 => Some(BackgroundIndex::Second),
            _ => None,
        }
    }

    /// Order `(c1, c2)` as `(background, foreground)`.
    #[inline]
    pub fn split<T>(self, c1: T, c2: T) -> (T, T) {
        match self {
            BackgroundIndex::First => (c1, c2),
            BackgroundIndex::Second => (c2, c1),
        }
    }
}

/// Viewing context for a comfort evaluation.
///
/// # Defaults
///
/// - Ambient: unset, scored as [`DEFAULT_AMBIENT`](super::DEFAULT_AMBIENT)
/// - Background: the first color
///
/// # Example
///
/// ```
/// use comfort_engine::{AmbientToken, BackgroundIndex, ComfortOptions};
///
/// let options = ComfortOptions::new()
///     .ambient(AmbientToken::Dim)
///     .background(BackgroundIndex::Second);
/// assert_eq!(options.ambient_luminance(), 0.3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComfortOptions {
    /// Ambient light level. `None` means "normal indoor daylight".
    pub ambient: Option<AmbientLevel>,

    /// Which input is the background.
    ///
    /// Default: [`BackgroundIndex::First`]
    pub background: BackgroundIndex,
}

impl ComfortOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ambient light level.
    #[inline]
    pub fn ambient(mut self, ambient: impl Into<AmbientLevel>) -> Self {
        self.ambient = Some(ambient.into());
        self
    }

    /// Set or clear the ambient light level.
    #[inline]
    pub fn maybe_ambient(mut self, ambient: Option<AmbientLevel>) -> Self {
        self.ambient = ambient;
        self
    }

    /// Choose which input is the background.
    #[inline]
    pub fn background(mut self, background: BackgroundIndex) -> Self {
        self.background = background;
        self
    }

    /// Ambient level reduced to a luminance proxy in 0.0..=1.0.
    #[inline]
    pub fn ambient_luminance(&self) -> f64 {
        normalize_ambient(self.ambient)
    }
}
