use anyhow::anyhow;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use crate::modules::auth::model::{Claims, Principal, UserRole};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Extractor that validates the access token and provides the
/// authenticated principal's claims.
///
/// Token lookup order: claims already attached to the request by the
/// role guard, then a `Bearer` authorization header, then the `token`
/// cookie set at login. If none yields a valid token the request is
/// rejected with 401.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Check if the principal carries any of the given role labels.
    pub fn has_any_role(&self, roles: &[UserRole]) -> bool {
        roles
            .iter()
            .any(|role| self.0.roles.iter().any(|label| label == role.as_str()))
    }

    /// The subject claim parsed as a user id.
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        self.0
            .sub
            .parse()
            .map_err(|_| AppError::unauthorized(anyhow!("Invalid user ID in token")))
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }

    /// The claims as a [`Principal`], the shape the demonstration routes
    /// echo back.
    pub fn principal(&self) -> Result<Principal, AppError> {
        Ok(Principal {
            id: self.user_id()?,
            email: self.0.email.clone(),
            roles: self.0.roles.clone(),
        })
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

fn cookie_token(parts: &Parts) -> Option<String> {
    CookieJar::from_headers(&parts.headers)
        .get("token")
        .map(|cookie| cookie.value().to_string())
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // The role guard verifies the token before the handler runs and
        // caches the principal on the request.
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        let token = match bearer_token(parts) {
            Some(token) => token.to_string(),
            None => cookie_token(parts)
                .ok_or_else(|| AppError::unauthorized(anyhow!("Missing authentication token")))?,
        };

        let claims = verify_token(&token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_for(roles: &[&str]) -> Claims {
        Claims {
            email: "claims@example.com".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            sub: Uuid::new_v4().to_string(),
            exp: 4102444800,
            iat: 1700000000,
        }
    }

    #[test]
    fn test_has_any_role_matches_a_single_label() {
        let principal = AuthUser(claims_for(&["user"]));

        assert!(principal.has_any_role(&[UserRole::User]));
        assert!(principal.has_any_role(&[UserRole::Admin, UserRole::User]));
        assert!(!principal.has_any_role(&[UserRole::Admin, UserRole::SuperUser]));
        assert!(!principal.has_any_role(&[]));
    }

    #[test]
    fn test_has_any_role_with_multiple_labels() {
        let principal = AuthUser(claims_for(&["user", "admin"]));

        assert!(principal.has_any_role(&[UserRole::Admin]));
        assert!(principal.has_any_role(&[UserRole::SuperUser, UserRole::Admin]));
        assert!(!principal.has_any_role(&[UserRole::SuperUser]));
    }

    #[test]
    fn test_user_id_parses_the_subject() {
        let mut claims = claims_for(&[]);
        let subject = Uuid::new_v4();
        claims.sub = subject.to_string();

        assert_eq!(AuthUser(claims).user_id().unwrap(), subject);
    }

    #[test]
    fn test_user_id_rejects_garbage() {
        let mut claims = claims_for(&[]);
        claims.sub = "not-a-uuid".to_string();

        assert!(AuthUser(claims).user_id().is_err());
    }

    #[test]
    fn test_principal_carries_id_email_and_roles() {
        let claims = claims_for(&["admin"]);
        let expected_id: Uuid = claims.sub.parse().unwrap();

        let principal = AuthUser(claims).principal().unwrap();

        assert_eq!(principal.id, expected_id);
        assert_eq!(principal.email, "claims@example.com");
        assert_eq!(principal.roles, vec!["admin".to_string()]);
    }
}
