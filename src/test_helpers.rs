use std::{path::Path, sync::Arc};

use axum::Router;

use crate::{config::AppConfig, db::connection, routes::app, state::AppState};

pub const TEST_JWT_SECRET: &str = "test-secret";

/// State over a private in-memory SQLite database, storing uploads in `upload_dir`.
pub async fn test_state(upload_dir: &Path) -> Arc<AppState> {
    test_state_with(upload_dir, |_| {}).await
}

/// Like [`test_state`], with a hook to adjust the config before connecting.
pub async fn test_state_with(
    upload_dir: &Path,
    configure: impl FnOnce(&mut AppConfig),
) -> Arc<AppState> {
    let mut cfg = AppConfig::default();
    // Every pooled connection to `:memory:` is its own database.
    cfg.database.url = "sqlite::memory:".to_string();
    cfg.database.max_connections = 1;
    cfg.database.min_idle = 1;
    cfg.uploads.dir = upload_dir.to_string_lossy().into_owned();
    cfg.auth.jwt_secret = TEST_JWT_SECRET.to_string();
    configure(&mut cfg);

    let db = connection::connect(&cfg.database)
        .await
        .expect("connect to in-memory sqlite");
    AppState::new(cfg, db)
}

pub fn test_router(state: &Arc<AppState>) -> Router {
    app(Arc::clone(state))
}
