use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::{AmbientSetting, AppConfig, GridResponse, PaletteEntry};
use crate::services::{GridOptions, PaletteGrid};

/// Request body for grid evaluation
#[derive(Debug, Deserialize, ToSchema)]
pub struct GridRequest {
    /// Palette colors, at least two and at most 32
    pub colors: Vec<PaletteEntry>,
    /// Ambient light (token or number); defaults to the configured ambient
    #[serde(default)]
    pub ambient: Option<AmbientSetting>,
    /// Include comfort scores; defaults to the configured switch
    #[serde(default)]
    pub comfort_enabled: Option<bool>,
}

/// Contrast grid for a palette
///
/// Evaluates every ordered pair of distinct colors. Pairs of a background
/// and a foreground color also carry a comfort score, with the background
/// color as the surface.
#[utoipa::path(
    post,
    path = "/api/grid",
    request_body = GridRequest,
    responses(
        (status = 200, description = "Grid computed", body = GridResponse),
        (status = 400, description = "Malformed body or invalid palette"),
    ),
    tag = "Palette"
)]
pub async fn handle_grid(
    State(config): State<Arc<AppConfig>>,
    body: Result<Json<GridRequest>, JsonRejection>,
) -> Result<Json<GridResponse>, ApiError> {
    let Json(request) = body?;
    let ambient = request.ambient.as_ref().or(config.ambient.as_ref());
    let options = GridOptions {
        ambient: ambient.and_then(AmbientSetting::to_level),
        comfort_enabled: request.comfort_enabled.unwrap_or(config.comfort_enabled),
    };

    let grid = PaletteGrid::build(&request.colors, &options)?;
    tracing::info!(colors = request.colors.len(), "Grid computed");

    Ok(Json(GridResponse::from(&grid)))
}

/// Contrast grid for the configured palette
#[utoipa::path(
    get,
    path = "/api/grid",
    responses(
        (status = 200, description = "Grid computed", body = GridResponse),
        (status = 400, description = "Configured palette is too small"),
    ),
    tag = "Palette"
)]
pub async fn handle_default_grid(
    State(config): State<Arc<AppConfig>>,
) -> Result<Json<GridResponse>, ApiError> {
    let options = GridOptions {
        ambient: config.ambient_level(),
        comfort_enabled: config.comfort_enabled,
    };
    let grid = PaletteGrid::build(&config.palette, &options)?;

    Ok(Json(GridResponse::from(&grid)))
}
