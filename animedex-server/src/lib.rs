//! # Animedex Server
//!
//! Read-only HTTP service over a static anime catalog.

pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
pub use routes::create_app;
