//! Authentication configuration
//!
//! StayEasy does not issue tokens itself; the account service does. The
//! API layer only verifies access tokens, so the configuration is limited
//! to what verification needs.

use serde::{Deserialize, Serialize};

/// JWT verification configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key used to verify token signatures
    pub secret: String,

    /// JWT issuer claim expected on incoming tokens
    pub issuer: String,

    /// Clock-skew leeway in seconds applied to expiry validation
    #[serde(default = "default_leeway")]
    pub leeway: u64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("your-secret-key-change-in-production"),
            issuer: String::from("stayeasy"),
            leeway: default_leeway(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "your-secret-key-change-in-production"
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT verification settings
    pub jwt: JwtConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| JwtConfig::default().secret);

        Self {
            jwt: JwtConfig::new(secret),
        }
    }
}

fn default_leeway() -> u64 {
    30
}
