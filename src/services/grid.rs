use comfort_engine::{
    classify_contrast, readable_text_color, AmbientLevel, ComfortOptions, ComfortScoreResult,
    ComfortScorer, ContrastReport, Srgb, TextColor,
};

use crate::error::PaletteError;
use crate::models::{parse_palette, PaletteEntry, Role};

/// Options for building a palette grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridOptions {
    /// Ambient light for comfort scoring (`None` means default)
    pub ambient: Option<AmbientLevel>,
    /// Score background/foreground pairs for comfort
    pub comfort_enabled: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            ambient: None,
            comfort_enabled: true,
        }
    }
}

/// A palette color with its label color
#[derive(Debug, Clone, PartialEq)]
pub struct GridHeader {
    pub name: Option<String>,
    pub color: Srgb,
    pub role: Role,
    pub text_color: TextColor,
}

/// Evaluation of one ordered pair of distinct palette entries
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub row: usize,
    pub column: usize,
    pub contrast: ContrastReport,
    /// Label color on the cell's surface
    pub text_color: TextColor,
    /// Set only for background/foreground pairs when comfort is enabled
    pub comfort: Option<ComfortScoreResult>,
}

/// Contrast (and optionally comfort) for every ordered pair of a palette
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteGrid {
    pub headers: Vec<GridHeader>,
    /// Row-major, diagonal omitted
    pub cells: Vec<GridCell>,
    /// Ambient luminance proxy used for comfort scores
    pub ambient: f64,
    pub comfort_enabled: bool,
}

impl PaletteGrid {
    /// Evaluate every ordered pair `(row, column)` with `row != column`.
    ///
    /// For pairs with different roles, the background-role entry is scored
    /// as the background and also provides the cell surface. Same-role pairs
    /// only get a contrast result, labelled against the row color.
    pub fn build(entries: &[PaletteEntry], options: &GridOptions) -> Result<Self, PaletteError> {
        if entries.len() < 2 {
            return Err(PaletteError::TooSmall(entries.len()));
        }
        let colors = parse_palette(entries)?;

        let scorer = ComfortScorer::new(ComfortOptions::new().maybe_ambient(options.ambient));

        let headers = entries
            .iter()
            .zip(&colors)
            .map(|(entry, color)| GridHeader {
                name: entry.name.clone(),
                color: *color,
                role: entry.role,
                text_color: readable_text_color(color),
            })
            .collect();

        let n = entries.len();
        let mut cells = Vec::with_capacity(n * (n - 1));
        for row in 0..n {
            for column in (0..n).filter(|&column| column != row) {
                let (row_color, row_role) = (&colors[row], entries[row].role);
                let (col_color, col_role) = (&colors[column], entries[column].role);

                let surface = if row_role == col_role || row_role == Role::Background {
                    row_color
                } else {
                    col_color
                };

                let comfort = (options.comfort_enabled && row_role != col_role).then(|| {
                    let (background, foreground) = if row_role == Role::Background {
                        (row_color, col_color)
                    } else {
                        (col_color, row_color)
                    };
                    scorer.score_pair(background, foreground)
                });

                cells.push(GridCell {
                    row,
                    column,
                    contrast: classify_contrast(row_color, col_color),
                    text_color: readable_text_color(surface),
                    comfort,
                });
            }
        }

        tracing::debug!(
            colors = n,
            cells = cells.len(),
            comfort_enabled = options.comfort_enabled,
            "Built palette grid"
        );

        Ok(Self {
            headers,
            cells,
            ambient: scorer.options().ambient_luminance(),
            comfort_enabled: options.comfort_enabled,
        })
    }

    /// Cell for `(row, column)`; `None` on the diagonal or out of range
    pub fn cell(&self, row: usize, column: usize) -> Option<&GridCell> {
        self.cells
            .iter()
            .find(|cell| cell.row == row && cell.column == column)
    }
}
