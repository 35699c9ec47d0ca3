use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use animedex_core::{
    CatalogQuery,
    model::{AnimeSummary, HomeResponse, Listing, SlideCard},
};
use tracing::debug;

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

/// GET /home - Popular and new-release sections
pub async fn get_home_handler(State(state): State<AppState>) -> Json<HomeResponse> {
    Json(state.catalog().home())
}

/// GET /query - Filter the catalog by name, status, year, genre and tag
pub async fn query_catalog_handler(
    State(state): State<AppState>,
    query: Result<Query<CatalogQuery>, QueryRejection>,
) -> AppResult<Json<Listing<AnimeSummary>>> {
    let Query(query) =
        query.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    let listing = state.catalog().query(&query);
    debug!(?query, total = listing.total, "catalog query");
    Ok(Json(listing))
}

/// GET /slideshow
pub async fn get_slideshow_handler(State(state): State<AppState>) -> Json<Listing<SlideCard>> {
    Json(state.catalog().slideshow())
}
