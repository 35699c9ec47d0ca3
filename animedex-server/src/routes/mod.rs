use animedex_core::api::routes;
use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::warn;

use crate::{
    AppState,
    handlers::{
        get_anime_handler, get_episode_handler, get_home_handler, get_quality_handler,
        get_slideshow_handler, health_handler, ping_handler, query_catalog_handler,
    },
    infra::config::CorsConfig,
};

/// Catalog endpoints, without static assets or middleware.
pub fn create_catalog_router() -> Router<AppState> {
    Router::new()
        .route(routes::HOME, get(get_home_handler))
        .route(routes::QUERY, get(query_catalog_handler))
        .route(routes::ANIME, get(get_anime_handler))
        .route(routes::EPISODE, get(get_episode_handler))
        .route(routes::QUALITY, get(get_quality_handler))
        .route(routes::SLIDESHOW, get(get_slideshow_handler))
}

/// Full application: catalog API, health checks, static assets, middleware.
pub fn create_app(state: AppState) -> Router {
    let assets = &state.config().assets;
    let images = ServeDir::new(&assets.images_dir);
    let public = ServeDir::new(&assets.public_dir);
    let cors_layer = build_cors_layer(&state.config().cors);

    Router::new()
        .route(routes::PING, get(ping_handler))
        .route(routes::HEALTH, get(health_handler))
        .merge(create_catalog_router())
        .nest_service(routes::IMAGES, images)
        .fallback_service(public)
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors_layer(cors: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(Any);

    if cors.is_permissive() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
