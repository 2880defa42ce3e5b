use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post, put},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    error::AppError,
    routes::response::{BoxResponse, MessageResponse},
    services::{
        ServiceContext,
        box_service::{BoxPatch, ExpiredSummary, NewBox},
        fields::nullable,
    },
    state::AppState,
};

/// `{"themeColor": null}` clears; a body without the key is rejected.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeRequest {
    #[serde(default, deserialize_with = "nullable")]
    theme_color: Option<Option<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverRequest {
    #[serde(default, deserialize_with = "nullable")]
    cover_image: Option<Option<String>>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/create", post(create_box))
        .route("/list", get(list_boxes))
        .route("/update/{id}", put(update_box))
        .route("/delete/{id}", delete(delete_box))
        .route("/expired-items/{id}", get(expired_items))
        .route("/theme/{id}", put(update_theme))
        .route("/cover/{id}", put(update_cover))
        .with_state(state)
}

async fn create_box(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewBox>,
) -> Result<Json<BoxResponse>, AppError> {
    let created = ServiceContext::from_state(&state).boxes().create(body).await?;
    Ok(Json(created.into()))
}

async fn list_boxes(State(state): State<Arc<AppState>>) -> Result<Json<Vec<BoxResponse>>, AppError> {
    let boxes = ServiceContext::from_state(&state).boxes().list().await?;
    Ok(Json(boxes.into_iter().map(BoxResponse::from).collect()))
}

async fn update_box(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(body): Json<BoxPatch>,
) -> Result<Json<BoxResponse>, AppError> {
    let updated = ServiceContext::from_state(&state)
        .boxes()
        .update(&id, body)
        .await?;
    Ok(Json(updated.into()))
}

async fn delete_box(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    ServiceContext::from_state(&state).boxes().delete(&id).await?;
    Ok(Json(MessageResponse {
        message: "Box deleted",
    }))
}

async fn expired_items(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ExpiredSummary>, AppError> {
    let summary = ServiceContext::from_state(&state)
        .boxes()
        .recompute_expired_flag(&id)
        .await?;
    Ok(Json(summary))
}

async fn update_theme(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(body): Json<ThemeRequest>,
) -> Result<Json<BoxResponse>, AppError> {
    let theme_color = body
        .theme_color
        .ok_or_else(|| AppError::validation("themeColor required"))?;
    let updated = ServiceContext::from_state(&state)
        .boxes()
        .update_theme(&id, theme_color)
        .await?;
    Ok(Json(updated.into()))
}

async fn update_cover(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(body): Json<CoverRequest>,
) -> Result<Json<BoxResponse>, AppError> {
    let cover_image = body
        .cover_image
        .ok_or_else(|| AppError::validation("coverImage required"))?;
    let updated = ServiceContext::from_state(&state)
        .boxes()
        .update_cover(&id, cover_image)
        .await?;
    Ok(Json(updated.into()))
}
