use serde::Serialize;

use crate::{
    auth::jwt::{JwtKeys, encode_token, make_claims},
    config::AuthConfig,
    error::AppError,
};

#[derive(Debug, Serialize)]
pub struct TokenBundle {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: u64,
}

/// Login stub: one configured account, no user store.
#[derive(Clone)]
pub struct AuthService<'a> {
    config: &'a AuthConfig,
    jwt: &'a JwtKeys,
}

impl<'a> AuthService<'a> {
    pub fn new(config: &'a AuthConfig, jwt: &'a JwtKeys) -> Self {
        Self { config, jwt }
    }

    pub fn login(&self, username: &str, password: &str) -> Result<TokenBundle, AppError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AppError::validation("Username and password required"));
        }

        if username != self.config.username || password != self.config.password {
            tracing::warn!(username, "rejected login");
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        let claims = make_claims(username, self.config.token_ttl_secs);
        Ok(TokenBundle {
            access_token: encode_token(self.jwt, &claims)?,
            token_type: "Bearer",
            expires_in: self.config.token_ttl_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

    use super::AuthService;
    use crate::{
        auth::{Claims, jwt::JwtKeys},
        config::AuthConfig,
    };

    #[test]
    fn issues_token_for_configured_account() {
        let config = AuthConfig::default();
        let keys = JwtKeys::from_secret(config.jwt_secret.as_bytes());

        let bundle = AuthService::new(&config, &keys)
            .login("admin", "admin")
            .expect("login should succeed");

        let claims = decode::<Claims>(
            &bundle.access_token,
            &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .expect("token should verify")
        .claims;
        assert_eq!(claims.sub, "admin");
        assert_eq!(bundle.expires_in, config.token_ttl_secs);
    }

    #[test]
    fn rejects_wrong_password() {
        let config = AuthConfig::default();
        let keys = JwtKeys::from_secret(config.jwt_secret.as_bytes());

        let err = AuthService::new(&config, &keys)
            .login("admin", "nope")
            .expect_err("login should fail");
        assert_eq!(err.message(), "Invalid credentials");
    }
}
