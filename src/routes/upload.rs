use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartError},
    routing::post,
};

use crate::{
    error::AppError,
    services::{ServiceContext, upload_service::StoredUpload},
    state::AppState,
};

const FILE_FIELD: &str = "file";

pub fn router(state: Arc<AppState>) -> Router {
    let limit = state.config.uploads.max_bytes;
    Router::new()
        .route("/upload", post(upload_file))
        .layer(DefaultBodyLimit::max(limit))
        .with_state(state)
}

async fn upload_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<StoredUpload>, AppError> {
    let mut received: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        if received.is_some() {
            return Err(AppError::validation("Only one file per upload"));
        }
        let original = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(multipart_error)?;
        received = Some((original, bytes.to_vec()));
    }

    let (original, bytes) =
        received.ok_or_else(|| AppError::validation("No file uploaded"))?;
    let stored = ServiceContext::uploads(&state)
        .store(&original, &bytes)
        .await?;
    Ok(Json(stored))
}

fn multipart_error(err: MultipartError) -> AppError {
    AppError::from_status(err.status(), err.body_text())
}
