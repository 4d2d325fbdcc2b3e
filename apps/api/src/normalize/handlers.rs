//! Axum route handlers for the skill cleaning API.

use std::time::Instant;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// `skill` is preferred; `skills` is accepted when `skill` is absent or blank.
#[derive(Debug, Deserialize)]
pub struct CleanSkillQuery {
    pub skill: Option<String>,
    pub skills: Option<String>,
    pub remove_stopwords: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct CleanSkillResponse {
    pub raw: String,
    pub cleaned: String,
    /// Seconds spent handling the request.
    pub time: f64,
}

#[derive(Debug, Deserialize)]
pub struct BatchCleanRequest {
    pub skills: Vec<String>,
    pub remove_stopwords: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct CleanedSkill {
    pub raw: String,
    pub cleaned: String,
}

#[derive(Debug, Serialize)]
pub struct BatchCleanResponse {
    pub results: Vec<CleanedSkill>,
    pub time: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/clean_skill
pub async fn handle_clean_skill(
    State(state): State<AppState>,
    params: Result<Query<CleanSkillQuery>, QueryRejection>,
) -> Result<Json<CleanSkillResponse>, AppError> {
    let started = Instant::now();
    let Query(params) = params?;

    let raw = params
        .skill
        .filter(|s| !s.trim().is_empty())
        .or(params.skills)
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::Validation("skill parameter is required".to_string()))?;
    check_length(&raw, state.config.max_skill_len)?;

    let remove_stopwords = params
        .remove_stopwords
        .unwrap_or(state.config.remove_stopwords);
    let cleaned = state.normalizer.normalize(&raw, remove_stopwords);
    debug!(raw = %raw, cleaned = %cleaned, "Cleaned skill");

    Ok(Json(CleanSkillResponse {
        raw,
        cleaned,
        time: started.elapsed().as_secs_f64(),
    }))
}

/// POST /api/v1/clean_skill/batch
pub async fn handle_clean_skill_batch(
    State(state): State<AppState>,
    request: Result<Json<BatchCleanRequest>, JsonRejection>,
) -> Result<Json<BatchCleanResponse>, AppError> {
    let started = Instant::now();
    let Json(request) = request?;

    if request.skills.is_empty() {
        return Err(AppError::Validation("skills cannot be empty".to_string()));
    }
    if request.skills.len() > state.config.max_batch_size {
        return Err(AppError::PayloadTooLarge(format!(
            "at most {} skills per batch, got {}",
            state.config.max_batch_size,
            request.skills.len()
        )));
    }
    for skill in &request.skills {
        check_length(skill, state.config.max_skill_len)?;
    }

    let remove_stopwords = request
        .remove_stopwords
        .unwrap_or(state.config.remove_stopwords);
    let results: Vec<CleanedSkill> = request
        .skills
        .into_iter()
        .map(|raw| {
            let cleaned = state.normalizer.normalize(&raw, remove_stopwords);
            CleanedSkill { raw, cleaned }
        })
        .collect();
    debug!(count = results.len(), "Cleaned skill batch");

    Ok(Json(BatchCleanResponse {
        results,
        time: started.elapsed().as_secs_f64(),
    }))
}

fn check_length(skill: &str, max_len: usize) -> Result<(), AppError> {
    let len = skill.chars().count();
    if len > max_len {
        return Err(AppError::PayloadTooLarge(format!(
            "skill is {len} characters; the limit is {max_len}"
        )));
    }
    Ok(())
}
