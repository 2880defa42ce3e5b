pub mod jwt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub sub: String, // username
    pub exp: usize,  // expiry (unix)
    pub iat: usize,  // issued at
}
