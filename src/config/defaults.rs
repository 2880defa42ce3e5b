pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: i64 = 3000;
pub const DEFAULT_RUST_LOG: &str = "info,tower_http=info";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://box_organizer.db?mode=rwc";
pub const DEFAULT_DB_MAX_CONNECTIONS: i64 = 10;
pub const DEFAULT_DB_MIN_IDLE: i64 = 2;
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";
pub const DEFAULT_UPLOAD_MAX_BYTES: i64 = 10 * 1024 * 1024;
pub const DEFAULT_JWT_SECRET: &str = "super-secret-change-me";
pub const DEFAULT_AUTH_USERNAME: &str = "admin";
pub const DEFAULT_AUTH_PASSWORD: &str = "admin";
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 60 * 60;
