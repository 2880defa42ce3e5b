use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use serde::Deserialize;

use crate::{
    error::AppError,
    services::{ServiceContext, auth_service::TokenBundle},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().route("/login", post(login)).with_state(state)
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<TokenBundle>, AppError> {
    let bundle = ServiceContext::auth(&state).login(&body.username, &body.password)?;
    Ok(Json(bundle))
}
