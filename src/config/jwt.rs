use std::env;

/// Fallback signing secret. Real deployments must set `JWT_SECRET`.
const DEFAULT_SECRET: &str = "your-secret-key-change-in-production";

/// Default access-token lifetime in seconds (2 hours).
const DEFAULT_ACCESS_EXPIRY_SECS: i64 = 7200;

/// Token signing configuration.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Access-token lifetime in seconds.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string()),
            access_token_expiry: env::var("JWT_ACCESS_EXPIRY")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_ACCESS_EXPIRY_SECS),
        }
    }
}
