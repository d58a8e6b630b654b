pub mod comfort;
pub mod contrast;
pub mod grid;

pub use comfort::{handle_comfort, __path_handle_comfort};
pub use contrast::{handle_contrast, __path_handle_contrast};
pub use grid::{handle_default_grid, handle_grid, GridRequest};
pub use grid::{__path_handle_default_grid, __path_handle_grid};

use comfort_engine::Srgb;
use utoipa::OpenApi;

use crate::error::ApiError;
use crate::models::{
    AmbientSetting, ComfortReasons, ComfortResponse, ContrastResponse, FactorReport,
    GridCellReport, GridHeaderReport, GridResponse, PaletteEntry, Role,
};

/// Parse a color request parameter, naming the parameter on failure
pub(crate) fn parse_color(field: &'static str, value: &str) -> Result<Srgb, ApiError> {
    value
        .parse()
        .map_err(|source| ApiError::InvalidColor { field, source })
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Color Comfort API",
        description = "WCAG contrast and reading comfort scoring for color pairs and palettes",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        handle_contrast,
        handle_comfort,
        handle_grid,
        handle_default_grid,
    ),
    components(schemas(
        ContrastResponse,
        ComfortResponse,
        ComfortReasons,
        FactorReport,
        GridRequest,
        GridResponse,
        GridHeaderReport,
        GridCellReport,
        PaletteEntry,
        Role,
        AmbientSetting,
    )),
    tags(
        (name = "Contrast", description = "WCAG contrast ratio and pass level"),
        (name = "Comfort", description = "Reading comfort score with per-factor breakdown"),
        (name = "Palette", description = "Contrast grids over whole palettes")
    )
)]
pub struct ApiDoc;
