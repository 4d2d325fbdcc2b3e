use std::time::Instant;

use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dates::clean_datetime;
use crate::errors::AppError;

/// `datetime` is preferred; `d` is accepted when `datetime` is absent or blank.
#[derive(Debug, Deserialize)]
pub struct CleanDatetimeQuery {
    pub datetime: Option<String>,
    pub d: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CleanDatetimeResponse {
    pub raw: String,
    /// ISO `YYYY-MM-DD`, or empty when the input could not be parsed.
    pub cleaned: String,
    pub time: f64,
}

/// GET /api/v1/clean_datetime
pub async fn handle_clean_datetime(
    params: Result<Query<CleanDatetimeQuery>, QueryRejection>,
) -> Result<Json<CleanDatetimeResponse>, AppError> {
    let started = Instant::now();
    let Query(params) = params?;

    let raw = params
        .datetime
        .filter(|s| !s.trim().is_empty())
        .or(params.d)
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::Validation("datetime parameter is required".to_string()))?;

    let cleaned = clean_datetime(&raw, Utc::now().date_naive())
        .map(|date| date.to_string())
        .unwrap_or_default();
    debug!(raw = %raw, cleaned = %cleaned, "Cleaned datetime");

    Ok(Json(CleanDatetimeResponse {
        raw,
        cleaned,
        time: started.elapsed().as_secs_f64(),
    }))
}
