//! Serializable reports shared by the HTTP API and `--json` CLI output.

use comfort_engine::{
    classify_contrast, readable_text_color, ComfortScoreBreakdown, ComfortScoreResult, Factor,
    Srgb,
};
use serde::Serialize;
use utoipa::ToSchema;

use super::palette::Role;
use crate::services::{GridCell, GridHeader, PaletteGrid};

/// Contrast between two colors
#[derive(Debug, Serialize, ToSchema)]
pub struct ContrastResponse {
    /// WCAG contrast ratio, 1.0 to 21.0
    #[schema(example = 21.0)]
    pub ratio: f64,
    /// `FAIL`, `AA18`, `AA` or `AAA`
    #[schema(example = "AAA")]
    pub level: String,
    /// Label color (`white` or `black`) for text drawn on color `a`
    pub text_color_a: String,
    /// Label color for text drawn on color `b`
    pub text_color_b: String,
}

impl ContrastResponse {
    pub fn new(a: &Srgb, b: &Srgb) -> Self {
        let report = classify_contrast(a, b);
        Self {
            ratio: report.ratio,
            level: report.level.to_string(),
            text_color_a: readable_text_color(a).to_string(),
            text_color_b: readable_text_color(b).to_string(),
        }
    }
}

/// Per-factor score deltas, keyed like the engine's factor keys
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComfortReasons {
    pub negative_polarity: f64,
    pub ambient_adaptation: f64,
    pub readability: f64,
    pub harmony: f64,
    pub vibrancy: f64,
    pub blue_light: f64,
}

impl From<&ComfortScoreBreakdown> for ComfortReasons {
    fn from(b: &ComfortScoreBreakdown) -> Self {
        Self {
            negative_polarity: b.negative_polarity,
            ambient_adaptation: b.ambient_adaptation,
            readability: b.readability,
            harmony: b.harmony,
            vibrancy: b.vibrancy,
            blue_light: b.blue_light,
        }
    }
}

/// One factor of the breakdown with its explanation
#[derive(Debug, Serialize, ToSchema)]
pub struct FactorReport {
    #[schema(example = "negativePolarity")]
    pub key: String,
    pub label: String,
    pub description: String,
    /// Score delta, always <= 0
    pub penalty: f64,
}

/// Comfort score for a background/foreground pair
#[derive(Debug, Serialize, ToSchema)]
pub struct ComfortResponse {
    /// 0 to 100, higher is more comfortable
    #[schema(example = 77)]
    pub score: u8,
    /// `optimal`, `ok` or `harsh`
    #[schema(example = "ok")]
    pub label: String,
    pub description: String,
    /// Ambient luminance proxy the score was computed for
    pub ambient: f64,
    pub reasons: ComfortReasons,
    /// The same deltas in evaluation order, with labels
    pub factors: Vec<FactorReport>,
}

impl ComfortResponse {
    pub fn new(result: &ComfortScoreResult, ambient: f64) -> Self {
        let label = result.label();
        Self {
            score: result.score,
            label: label.to_string(),
            description: label.description().to_string(),
            ambient,
            reasons: ComfortReasons::from(&result.reasons),
            factors: result
                .reasons
                .iter()
                .map(|(factor, penalty)| factor_report(factor, penalty))
                .collect(),
        }
    }
}

fn factor_report(factor: Factor, penalty: f64) -> FactorReport {
    FactorReport {
        key: factor.key().to_string(),
        label: factor.label().to_string(),
        description: factor.description().to_string(),
        penalty,
    }
}

/// A palette color as a grid header
#[derive(Debug, Serialize, ToSchema)]
pub struct GridHeaderReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Normalized `#rrggbb`
    pub color: String,
    pub role: Role,
    /// Label color for the header swatch
    pub text_color: String,
}

impl From<&GridHeader> for GridHeaderReport {
    fn from(header: &GridHeader) -> Self {
        Self {
            name: header.name.clone(),
            color: header.color.to_hex(),
            role: header.role,
            text_color: header.text_color.to_string(),
        }
    }
}

/// One off-diagonal grid cell
#[derive(Debug, Serialize, ToSchema)]
pub struct GridCellReport {
    pub row: usize,
    pub column: usize,
    pub ratio: f64,
    pub level: String,
    /// Label color for the cell
    pub text_color: String,
    /// Present only for background/foreground pairs when comfort is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comfort: Option<ComfortResponse>,
}

impl GridCellReport {
    fn new(cell: &GridCell, ambient: f64) -> Self {
        Self {
            row: cell.row,
            column: cell.column,
            ratio: cell.contrast.ratio,
            level: cell.contrast.level.to_string(),
            text_color: cell.text_color.to_string(),
            comfort: cell
                .comfort
                .as_ref()
                .map(|result| ComfortResponse::new(result, ambient)),
        }
    }
}

/// Contrast grid over a palette
#[derive(Debug, Serialize, ToSchema)]
pub struct GridResponse {
    pub headers: Vec<GridHeaderReport>,
    /// Cells in row-major order, diagonal omitted
    pub cells: Vec<GridCellReport>,
    pub ambient: f64,
    pub comfort_enabled: bool,
}

impl From<&PaletteGrid> for GridResponse {
    fn from(grid: &PaletteGrid) -> Self {
        Self {
            headers: grid.headers.iter().map(GridHeaderReport::from).collect(),
            cells: grid
                .cells
                .iter()
                .map(|cell| GridCellReport::new(cell, grid.ambient))
                .collect(),
            ambient: grid.ambient,
            comfort_enabled: grid.comfort_enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comfort_engine::{score_comfort, ComfortOptions};

    #[test]
    fn test_contrast_response() {
        let response = ContrastResponse::new(&Srgb::BLACK, &Srgb::WHITE);
        assert!((response.ratio - 21.0).abs() < 1e-9);
        assert_eq!(response.level, "AAA");
        assert_eq!(response.text_color_a, "white");
        assert_eq!(response.text_color_b, "black");
    }

    #[test]
    fn test_comfort_response_serialization() {
        let options = ComfortOptions::new();
        let result = score_comfort(&Srgb::BLACK, &Srgb::WHITE, &options);
        let response = ComfortResponse::new(&result, options.ambient_luminance());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["score"], 77);
        assert_eq!(json["label"], "ok");
        assert_eq!(json["ambient"], 0.75);
        assert_eq!(json["reasons"]["negativePolarity"], -10.0);
        assert_eq!(json["reasons"]["blueLight"], 0.0);

        let keys: Vec<&str> = json["factors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["key"].as_str().unwrap())
            .collect();
        assert_eq!(
            keys,
            [
                "negativePolarity",
                "ambientAdaptation",
                "readability",
                "harmony",
                "vibrancy",
                "blueLight"
            ]
        );
    }
}
