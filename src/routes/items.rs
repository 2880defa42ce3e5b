use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    error::AppError,
    routes::response::{ItemResponse, MessageResponse, items_response},
    services::{
        ServiceContext,
        item_service::{ItemPatch, NewItem},
    },
    state::AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    box_id: Uuid,
    #[serde(default)]
    query: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxParam {
    box_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRequest {
    pos_x: f64,
    pos_y: f64,
}

#[derive(Debug, Deserialize)]
pub struct ScaleRequest {
    scale: f64,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/create", post(create_item))
        .route("/list/{box_id}", get(list_items))
        .route("/update/{id}", put(update_item))
        .route("/delete/{id}", delete(delete_item))
        .route("/search", get(search_items))
        .route("/expired", get(expired_items))
        .route("/position/{id}", put(update_position))
        .route("/scale/{id}", put(update_scale))
        .with_state(state)
}

async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewItem>,
) -> Result<Json<ItemResponse>, AppError> {
    let created = ServiceContext::from_state(&state).items().create(body).await?;
    Ok(Json(created.into()))
}

async fn list_items(
    State(state): State<Arc<AppState>>,
    Path(box_id): Path<Uuid>,
) -> Result<Json<Vec<ItemResponse>>, AppError> {
    let items = ServiceContext::from_state(&state)
        .items()
        .list_by_box(&box_id)
        .await?;
    Ok(Json(items_response(items)))
}

async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(body): Json<ItemPatch>,
) -> Result<Json<ItemResponse>, AppError> {
    let updated = ServiceContext::from_state(&state)
        .items()
        .update(&id, body)
        .await?;
    Ok(Json(updated.into()))
}

async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    ServiceContext::from_state(&state).items().delete(&id).await?;
    Ok(Json(MessageResponse {
        message: "Item deleted",
    }))
}

async fn search_items(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<ItemResponse>>, AppError> {
    let items = ServiceContext::from_state(&state)
        .items()
        .search(&params.box_id, &params.query)
        .await?;
    Ok(Json(items_response(items)))
}

async fn expired_items(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BoxParam>,
) -> Result<Json<Vec<ItemResponse>>, AppError> {
    let items = ServiceContext::from_state(&state)
        .items()
        .list_expired(&params.box_id)
        .await?;
    Ok(Json(items_response(items)))
}

async fn update_position(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(body): Json<PositionRequest>,
) -> Result<Json<ItemResponse>, AppError> {
    let updated = ServiceContext::from_state(&state)
        .items()
        .update_position(&id, body.pos_x, body.pos_y)
        .await?;
    Ok(Json(updated.into()))
}

async fn update_scale(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(body): Json<ScaleRequest>,
) -> Result<Json<ItemResponse>, AppError> {
    let updated = ServiceContext::from_state(&state)
        .items()
        .update_scale(&id, body.scale)
        .await?;
    Ok(Json(updated.into()))
}
