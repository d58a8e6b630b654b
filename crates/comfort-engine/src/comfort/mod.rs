//! Perceptual comfort scoring for background/foreground color pairs.
//!
//! A pair starts at 100 and collects six independent penalties:
//!
//! | Factor | Applies when | Penalty |
//! |--------|--------------|---------|
//! | Negative polarity | foreground brighter than background | flat 10 |
//! | Ambient adaptation | always | `80 * |L_max - ambient|^1.3` |
//! | Readability | contrast below 4.5:1 | linear up to 70 at 1:1 |
//! | Harmony | both chromas above 20 | up to 20 |
//! | Vibrancy | saturated, opposing hues, similar lightness | up to 20 |
//! | Blue light | dim room, bright blue foreground | flat 5 |
//!
//! The sum is clamped to 0..=100 and rounded. See [`Factor`] for the
//! per-factor rules and [`score_comfort`] for the entry point.
//!
//! The thresholds are internal; callers observe them only through scores:
//!
//! ```compile_fail
//! use comfort_engine::comfort::NIGHT_AMBIENT;
//! ```

mod ambient;
mod factor;
mod options;
mod score;

pub use ambient::{normalize_ambient, AmbientLevel, AmbientToken, DEFAULT_AMBIENT};
pub use factor::{hue_distance, Factor, PairMetrics};
pub use options::{BackgroundIndex, ComfortOptions};
pub use score::{
    comfort_score, score_comfort, ComfortLabel, ComfortScoreBreakdown, ComfortScoreResult,
    ComfortScorer, BASE_SCORE,
};
