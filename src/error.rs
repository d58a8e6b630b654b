use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use comfort_engine::ParseColorError;
use serde_json::json;
use thiserror::Error;

use crate::models::MAX_PALETTE_SIZE;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid color for '{field}': {source}")]
    InvalidColor {
        field: &'static str,
        source: ParseColorError,
    },

    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter { name: &'static str, message: String },

    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),

    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] QueryRejection),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("Palette needs at least 2 colors, got {0}")]
    TooSmall(usize),

    #[error("Palette has {0} colors, at most {max} are allowed", max = MAX_PALETTE_SIZE)]
    TooLarge(usize),

    #[error("Invalid color at position {index}: {source}")]
    InvalidColor {
        index: usize,
        source: ParseColorError,
    },

    #[error("Unknown role '{0}' (expected bg, fg, background or foreground)")]
    UnknownRole(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid palette: {0}")]
    Palette(#[from] PaletteError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidColor { .. } => StatusCode::BAD_REQUEST,
            ApiError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            ApiError::Palette(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        };

        tracing::debug!(error = %self, "Rejected request");

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
