use axum::{
    extract::{rejection::QueryRejection, Query},
    response::Json,
};
use serde::Deserialize;

use super::parse_color;
use crate::error::ApiError;
use crate::models::ContrastResponse;

/// Query parameters for /api/contrast
#[derive(Debug, Deserialize)]
pub struct ContrastQuery {
    pub a: String,
    pub b: String,
}

/// Contrast ratio between two colors
///
/// Returns the WCAG ratio, its pass level and a readable label color for
/// each input. The result does not depend on argument order.
#[utoipa::path(
    get,
    path = "/api/contrast",
    responses(
        (status = 200, description = "Contrast computed", body = ContrastResponse),
        (status = 400, description = "Missing or invalid color"),
    ),
    params(
        ("a" = String, Query, description = "First color (e.g. '#7f42ff', 'rgb(0, 0, 0)', 'white')"),
        ("b" = String, Query, description = "Second color"),
    ),
    tag = "Contrast"
)]
pub async fn handle_contrast(
    query: Result<Query<ContrastQuery>, QueryRejection>,
) -> Result<Json<ContrastResponse>, ApiError> {
    let Query(query) = query?;
    let a = parse_color("a", &query.a)?;
    let b = parse_color("b", &query.b)?;

    let response = ContrastResponse::new(&a, &b);
    tracing::debug!(
        a = %a.to_hex(),
        b = %b.to_hex(),
        ratio = response.ratio,
        level = %response.level,
        "Contrast computed"
    );

    Ok(Json(response))
}
