use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use comfort_engine::{score_comfort, BackgroundIndex, ComfortOptions};
use serde::Deserialize;
use std::sync::Arc;

use super::parse_color;
use crate::error::ApiError;
use crate::models::{resolve_ambient, AppConfig, ComfortResponse};

/// Query parameters for /api/comfort
#[derive(Debug, Deserialize)]
pub struct ComfortQuery {
    pub bg: String,
    pub fg: String,
    pub ambient: Option<String>,
    /// `0` or `1`, parsed by the handler
    pub background_index: Option<String>,
}

/// Reading comfort of a background/foreground pair
///
/// Scores the pair from 0 to 100 and explains the score with six
/// per-factor penalties. Without `ambient`, the configured ambient (or
/// normal indoor light) is used; unknown ambient names also fall back to
/// normal indoor light.
#[utoipa::path(
    get,
    path = "/api/comfort",
    responses(
        (status = 200, description = "Comfort score computed", body = ComfortResponse),
        (status = 400, description = "Missing or invalid color or parameter"),
    ),
    params(
        ("bg" = String, Query, description = "Background color"),
        ("fg" = String, Query, description = "Foreground (text) color"),
        ("ambient" = Option<String>, Query, description = "Ambient light: 'dark', 'dim', 'medium', 'bright' or a number in 0..1"),
        ("background_index" = Option<u8>, Query, description = "1 to treat `fg` as the background (default 0)"),
    ),
    tag = "Comfort"
)]
pub async fn handle_comfort(
    State(config): State<Arc<AppConfig>>,
    query: Result<Query<ComfortQuery>, QueryRejection>,
) -> Result<Json<ComfortResponse>, ApiError> {
    let Query(query) = query?;
    let bg = parse_color("bg", &query.bg)?;
    let fg = parse_color("fg", &query.fg)?;

    let background = match query.background_index.as_deref() {
        None => BackgroundIndex::default(),
        Some(index) => index
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(BackgroundIndex::from_index)
            .ok_or_else(|| ApiError::InvalidParameter {
                name: "background_index",
                message: format!("expected 0 or 1, got {index:?}"),
            })?,
    };

    let options = ComfortOptions::new()
        .maybe_ambient(resolve_ambient(
            query.ambient.as_deref(),
            config.ambient.as_ref(),
        ))
        .background(background);

    let result = score_comfort(&bg, &fg, &options);
    tracing::debug!(
        bg = %bg.to_hex(),
        fg = %fg.to_hex(),
        score = result.score,
        ambient = options.ambient_luminance(),
        "Comfort scored"
    );

    Ok(Json(ComfortResponse::new(
        &result,
        options.ambient_luminance(),
    )))
}
