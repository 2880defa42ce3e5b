use std::sync::Arc;

use axum::{Router, middleware};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::{
    error::AppError,
    middleware::{catch_panic_layer, json_error_middleware},
    services::upload_service::PUBLIC_PREFIX,
    state::AppState,
};

pub mod auth;
pub mod boxes;
pub mod items;
pub mod response;
pub mod upload;

pub fn router(state: Arc<AppState>) -> Router {
    let uploads = ServeDir::new(&state.config.uploads.dir);

    Router::new()
        .nest("/auth", auth::router(state.clone()))
        .nest("/box", boxes::router(state.clone()))
        .nest("/item", items::router(state.clone()))
        .merge(upload::router(state))
        .nest_service(&format!("/{PUBLIC_PREFIX}"), uploads)
        .fallback(route_not_found)
}

/// The router with every cross-cutting layer attached; what the server binds.
pub fn app(state: Arc<AppState>) -> Router {
    router(state)
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn route_not_found() -> AppError {
    AppError::not_found("Route not found")
}
