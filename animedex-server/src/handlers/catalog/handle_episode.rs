use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use animedex_core::{
    parse_id,
    model::{EpisodeView, QualityView},
};
use tracing::debug;

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

fn episode_id(segment: Result<Path<String>, PathRejection>) -> Option<i64> {
    segment
        .inspect_err(|rejection| debug!(%rejection, "undecodable episode id"))
        .ok()
        .and_then(|Path(id)| parse_id(&id))
}

/// GET /episode/{episode_id}
pub async fn get_episode_handler(
    State(state): State<AppState>,
    segment: Result<Path<String>, PathRejection>,
) -> AppResult<Json<EpisodeView>> {
    episode_id(segment)
        .and_then(|id| state.catalog().episode_view(id))
        .map(Json)
        .ok_or_else(AppError::episode_not_found)
}

/// GET /quality/{episode_id} - Alternate video sources for an episode
pub async fn get_quality_handler(
    State(state): State<AppState>,
    segment: Result<Path<String>, PathRejection>,
) -> AppResult<Json<QualityView>> {
    episode_id(segment)
        .and_then(|id| state.catalog().quality(id))
        .map(Json)
        .ok_or_else(AppError::episode_not_found)
}
