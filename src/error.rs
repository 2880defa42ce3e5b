use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;

use crate::db::dao::DaoLayerError;

/// Every failure a handler can surface. Each kind owns one status code.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    ValidationFailed(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    StorageUnavailable(String),
    #[error("{0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    /// Shape used by the catch-all handlers: a fixed label plus the detail.
    pub fn server_error(message: impl Into<String>) -> Self {
        Self {
            error: "server error".to_string(),
            message: Some(message.into()),
        }
    }
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn storage_unavailable(message: impl Into<String>) -> Self {
        Self::StorageUnavailable(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::ValidationFailed(message)
            | Self::Unauthorized(message)
            | Self::NotFound(message)
            | Self::StorageUnavailable(message)
            | Self::Internal(message) => message.as_str(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Inverse of [`AppError::status`] for responses produced outside our handlers.
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::unauthorized(message),
            StatusCode::NOT_FOUND => Self::not_found(message),
            StatusCode::SERVICE_UNAVAILABLE => Self::storage_unavailable(message),
            _ if status.is_client_error() => Self::validation(message),
            _ => Self::internal(message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        }
        (status, Json(ErrorBody::new(self.message()))).into_response()
    }
}

impl From<DaoLayerError> for AppError {
    fn from(err: DaoLayerError) -> Self {
        match err {
            DaoLayerError::NotFound { .. } => AppError::not_found(err.to_string()),
            DaoLayerError::InvalidPagination { .. } => AppError::validation(err.to_string()),
            DaoLayerError::Db(db_err) => from_db_err(db_err),
        }
    }
}

fn from_db_err(err: DbErr) -> AppError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
            AppError::storage_unavailable(format!("Storage unavailable: {err}"))
        }
        other => AppError::internal(format!("Database error: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use axum::{body, http::StatusCode, response::IntoResponse};
    use sea_orm::DbErr;
    use uuid::Uuid;

    use super::AppError;
    use crate::db::dao::DaoLayerError;

    #[test]
    fn dao_not_found_maps_to_404() {
        let err: AppError = DaoLayerError::NotFound {
            entity: "Box",
            id: Uuid::nil(),
        }
        .into();

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert!(err.message().starts_with("Box not found"));
    }

    #[test]
    fn generic_db_errors_map_to_500() {
        let err: AppError = DaoLayerError::Db(DbErr::Custom("boom".to_string())).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn status_round_trips_through_kinds() {
        for err in [
            AppError::validation("v"),
            AppError::unauthorized("u"),
            AppError::not_found("n"),
            AppError::storage_unavailable("s"),
            AppError::internal("i"),
        ] {
            let status = err.status();
            let back = AppError::from_status(status, err.message().to_string());
            assert_eq!(back.status(), status);
        }
    }

    #[tokio::test]
    async fn renders_error_body() {
        let response = AppError::validation("Name required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should read");
        let json: serde_json::Value = serde_json::from_slice(&bytes).expect("body should be json");
        assert_eq!(json, serde_json::json!({ "error": "Name required" }));
    }
}
