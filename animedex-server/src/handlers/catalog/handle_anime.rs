use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::{IntoResponse, Response},
};
use animedex_core::parse_id;
use tracing::debug;

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

/// GET /id/{id} - The stored record, exactly as it appears in the dataset
///
/// A segment that does not even decode (e.g. `%FF`) is an unknown id.
pub async fn get_anime_handler(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Response> {
    let id = id
        .inspect_err(|rejection| debug!(%rejection, "undecodable anime id"))
        .ok()
        .and_then(|Path(id)| parse_id(&id));

    let record = id
        .and_then(|id| state.catalog().anime_record(id))
        .ok_or_else(AppError::anime_not_found)?;

    Ok(Json(record).into_response())
}
