use anyhow::anyhow;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::Claims;
use crate::utils::errors::AppError;

/// Signs an access token for the given user. The subject is the user id,
/// and the principal's roles travel inside the token so route guards can
/// check them without a database round trip.
pub fn create_access_token(
    user_id: Uuid,
    email: &str,
    roles: &[String],
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let issued_at = Utc::now();
    let expires_at = issued_at + Duration::seconds(jwt_config.access_token_expiry);

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        roles: roles.to_vec(),
        exp: expires_at.timestamp() as usize,
        iat: issued_at.timestamp() as usize,
    };

    let key = EncodingKey::from_secret(jwt_config.secret.as_bytes());
    encode(&Header::default(), &claims, &key).map_err(AppError::internal)
}

/// Checks the signature and expiry, returning the embedded claims.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let key = DecodingKey::from_secret(jwt_config.secret.as_bytes());

    decode::<Claims>(token, &key, &Validation::default())
        .map(|data| data.claims)
        .map_err(|_| AppError::unauthorized(anyhow!("Invalid or expired token")))
}
