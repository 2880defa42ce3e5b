use anyhow::{Result, bail};

use super::AppConfig;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    if cfg.database.url.trim().is_empty() {
        errors.push("database.url must not be empty".to_string());
    }

    if cfg.database.max_connections == 0 {
        errors.push("database.max_connections must be > 0".to_string());
    }

    if cfg.database.min_idle > cfg.database.max_connections {
        errors.push(format!(
            "database.min_idle ({}) must be <= database.max_connections ({})",
            cfg.database.min_idle, cfg.database.max_connections
        ));
    }

    if cfg.uploads.dir.trim().is_empty() {
        errors.push("uploads.dir must not be empty".to_string());
    }

    if cfg.uploads.max_bytes == 0 {
        errors.push("uploads.max_bytes must be > 0".to_string());
    }

    if cfg.auth.jwt_secret.trim().is_empty() {
        errors.push("auth.jwt_secret must not be empty".to_string());
    }

    if cfg.auth.username.trim().is_empty() {
        errors.push("auth.username must not be empty".to_string());
    }

    if cfg.auth.token_ttl_secs == 0 {
        errors.push("auth.token_ttl_secs must be > 0".to_string());
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::config::AppConfig;

    #[test]
    fn defaults_are_valid() {
        validate(&AppConfig::default()).expect("default config should validate");
    }

    #[test]
    fn reports_every_problem_at_once() {
        let mut cfg = AppConfig::default();
        cfg.general.host = "  ".to_string();
        cfg.database.min_idle = 20;
        cfg.uploads.max_bytes = 0;

        let err = validate(&cfg).expect_err("config should be rejected");
        let message = err.to_string();

        assert!(message.contains("general.host"));
        assert!(message.contains("database.min_idle (20)"));
        assert!(message.contains("uploads.max_bytes"));
    }

    #[test]
    fn rejects_blank_jwt_secret() {
        let mut cfg = AppConfig::default();
        cfg.auth.jwt_secret = String::new();

        let err = validate(&cfg).expect_err("blank secret should be rejected");
        assert!(err.to_string().contains("auth.jwt_secret"));
    }
}
