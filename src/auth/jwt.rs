use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

use super::Claims;
use crate::error::AppError;

/// Signing side only; no route verifies tokens.
#[derive(Clone)]
pub struct JwtKeys {
    pub enc: EncodingKey,
}

impl JwtKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            enc: EncodingKey::from_secret(secret),
        }
    }
}

pub fn now_unix() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as usize)
        .unwrap_or(0)
}

pub fn make_claims(subject: &str, ttl_secs: u64) -> Claims {
    let iat = now_unix();
    Claims {
        sub: subject.to_string(),
        iat,
        exp: iat + ttl_secs as usize,
    }
}

pub fn encode_token(keys: &JwtKeys, claims: &Claims) -> Result<String, AppError> {
    let mut header = Header::new(Algorithm::HS256);
    header.typ = Some("JWT".into());
    encode(&header, claims, &keys.enc).map_err(|_| AppError::internal("Token encoding failed"))
}
