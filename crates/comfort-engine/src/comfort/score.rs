//! Score accumulation, the result types, and the comfort label.

use std::fmt;

use super::factor::{Factor, PairMetrics};
use super::options::ComfortOptions;
use crate::color::ColorModel;

/// Score every evaluation starts from.
pub const BASE_SCORE: f64 = 100.0;

/// Per-factor score deltas. Every entry is <= 0 and always present.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComfortScoreBreakdown {
    pub negative_polarity: f64,
    pub ambient_adaptation: f64,
    pub readability: f64,
    pub harmony: f64,
    pub vibrancy: f64,
    pub blue_light: f64,
}

impl ComfortScoreBreakdown {
    /// Delta recorded for `factor`.
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::NegativePolarity => self.negative_polarity,
            Factor::AmbientAdaptation => self.ambient_adaptation,
            Factor::Readability => self.readability,
            Factor::Harmony => self.harmony,
            Factor::Vibrancy => self.vibrancy,
            Factor::BlueLight => self.blue_light,
        }
    }

    fn slot(&mut self, factor: Factor) -> &mut f64 {
        match factor {
            Factor::NegativePolarity => &mut self.negative_polarity,
            Factor::AmbientAdaptation => &mut self.ambient_adaptation,
            Factor::Readability => &mut self.readability,
            Factor::Harmony => &mut self.harmony,
            Factor::Vibrancy => &mut self.vibrancy,
            Factor::BlueLight => &mut self.blue_light,
        }
    }

    /// Evaluate all factors for `metrics`, in order.
    pub fn evaluate(metrics: &PairMetrics) -> Self {
        Factor::ALL
            .into_iter()
            .fold(Self::default(), |mut breakdown, factor| {
                *breakdown.slot(factor) = factor.penalty(metrics);
                breakdown
            })
    }

    /// `(factor, delta)` pairs in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    /// Sum of all deltas.
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, delta)| delta).sum()
    }

    /// Final score implied by these deltas: `round(clamp(100 + total, 0, 100))`.
    pub fn score(&self) -> u8 {
        let raw = BASE_SCORE + self.total();
        if raw.is_nan() {
            return 0;
        }
        raw.clamp(0.0, 100.0).round() as u8
    }
}

/// Comfort score together with the penalties that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComfortScoreResult {
    /// 0..=100, higher is more comfortable
    pub score: u8,
    pub reasons: ComfortScoreBreakdown,
}

impl ComfortScoreResult {
    pub fn label(&self) -> ComfortLabel {
        ComfortLabel::from_score(self.score)
    }
}

/// Coarse bucket for a comfort score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComfortLabel {
    /// Below 60
    Harsh,
    /// 60 to 79
    Ok,
    /// 80 and above
    Optimal,
}

impl ComfortLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => ComfortLabel::Optimal,
            60..=79 => ComfortLabel::Ok,
            _ => ComfortLabel::Harsh,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ComfortLabel::Optimal => "optimal",
            ComfortLabel::Ok => "ok",
            ComfortLabel::Harsh => "harsh",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ComfortLabel::Optimal => "Ideal color harmony for comfortable, extended viewing.",
            ComfortLabel::Ok => {
                "Acceptable for most cases, but may cause mild strain or lack harmony in some settings."
            }
            ComfortLabel::Harsh => {
                "Visually straining or uncomfortable, avoid for readability or prolonged use."
            }
        }
    }
}

impl fmt::Display for ComfortLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comfort scorer bound to a viewing context.
///
/// # Example
///
/// ```
/// use comfort_engine::{AmbientToken, ComfortLabel, ComfortOptions, ComfortScorer, Srgb};
///
/// let scorer = ComfortScorer::new(ComfortOptions::new().ambient(AmbientToken::Bright));
/// let result = scorer.score(&Srgb::BLACK, &Srgb::WHITE);
/// assert_eq!(result.label(), ComfortLabel::Optimal);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ComfortScorer {
    options: ComfortOptions,
}

impl ComfortScorer {
    pub fn new(options: ComfortOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ComfortOptions {
        &self.options
    }

    /// Score the pair `(c1, c2)`; which one is the background is decided
    /// by the scorer's [`BackgroundIndex`](super::BackgroundIndex).
    pub fn score<C: ColorModel + ?Sized>(&self, c1: &C, c2: &C) -> ComfortScoreResult {
        let (background, foreground) = self.options.background.split(c1, c2);
        self.score_pair(background, foreground)
    }

    /// Score with an explicit background and foreground, ignoring the
    /// configured background index.
    pub fn score_pair<B, F>(&self, background: &B, foreground: &F) -> ComfortScoreResult
    where
        B: ColorModel + ?Sized,
        F: ColorModel + ?Sized,
    {
        let metrics =
            PairMetrics::measure(background, foreground, self.options.ambient_luminance());
        let reasons = ComfortScoreBreakdown::evaluate(&metrics);
        ComfortScoreResult {
            score: reasons.score(),
            reasons,
        }
    }
}

/// Compute the comfort score and its breakdown for `c1`/`c2`.
///
/// By default `c1` is the background and `c2` the foreground.
pub fn score_comfort<C: ColorModel + ?Sized>(
    c1: &C,
    c2: &C,
    options: &ComfortOptions,
) -> ComfortScoreResult {
    ComfortScorer::new(*options).score(c1, c2)
}

/// Scalar form of [`score_comfort`].
pub fn comfort_score<C: ColorModel + ?Sized>(c1: &C, c2: &C, options: &ComfortOptions) -> u8 {
    score_comfort(c1, c2, options).score
}
