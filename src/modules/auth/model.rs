//! Auth data models and DTOs.
//!
//! This module contains the persisted user entity, the request/response
//! DTOs for registration and login, the JWT claims structure, and the
//! role labels understood by the authorization guard.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Role labels a user can carry.
///
/// Stored in the database as plain text labels inside the user's
/// `roles` array, and compared against route requirements by the
/// role guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    SuperUser,
    Admin,
    User,
}

impl UserRole {
    /// The label as persisted in `users.roles` and carried in token claims.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SuperUser => "super-user",
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }
}

/// A user account.
///
/// The password column is intentionally absent from this struct so it can
/// never leak through a response body; queries that need the stored hash
/// use a dedicated row type local to the service.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub is_active: bool,
    pub roles: Vec<String>,
}

/// Canonicalizes an email for storage and lookup: trimmed, lowercase.
///
/// Applied exactly once per write. Idempotent, so re-normalizing an
/// already-stored value is a no-op. Update paths reuse this same rule
/// rather than defining their own.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

// JWT Claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub email: String,
    pub roles: Vec<String>,
    pub exp: usize,
    pub iat: usize,
}

/// DTO for registering a new user.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6, max = 50))]
    pub password: String,
    #[validate(length(min = 1))]
    pub full_name: String,
}

/// DTO for logging in.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginUserDto {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6, max = 50))]
    pub password: String,
}

/// What a successful login produces: the stored user plus a signed
/// token. The controller moves the token into a cookie instead of the
/// response body, so this type never serializes as-is.
#[derive(Debug)]
pub struct LoginResult {
    pub user: User,
    pub token: String,
}

/// Body returned by `GET /auth/check-status`: the principal as currently
/// stored, plus a freshly signed token.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthStatusResponse {
    pub user: User,
    pub token: String,
}

/// The authenticated principal as carried by a verified token: the
/// claims projection of a user, without any database round trip.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Principal {
    pub id: Uuid,
    pub email: String,
    pub roles: Vec<String>,
}

/// Body returned by `GET /auth/private`.
#[derive(Debug, Serialize, ToSchema)]
pub struct PrivateRouteResponse {
    pub user: Principal,
    pub user_email: String,
    pub raw_headers: Vec<String>,
}

/// Body returned by the role-guarded demonstration routes.
#[derive(Debug, Serialize, ToSchema)]
pub struct RoleCheckedResponse {
    pub ok: bool,
    pub user: Principal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email_trims_and_lowercases() {
        assert_eq!(
            normalize_email("  John.DOE@Example.COM  "),
            "john.doe@example.com"
        );
        assert_eq!(normalize_email("plain@example.com"), "plain@example.com");
        assert_eq!(normalize_email("\tUPPER@CASE.IO\n"), "upper@case.io");
    }

    #[test]
    fn test_normalize_email_is_idempotent() {
        let once = normalize_email("  MiXeD@Case.Org ");
        let twice = normalize_email(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_user_role_labels() {
        assert_eq!(UserRole::SuperUser.as_str(), "super-user");
        assert_eq!(UserRole::Admin.as_str(), "admin");
        assert_eq!(UserRole::User.as_str(), "user");
    }

    #[test]
    fn test_user_role_serde_matches_labels() {
        assert_eq!(
            serde_json::to_string(&UserRole::SuperUser).unwrap(),
            "\"super-user\""
        );
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
        let parsed: UserRole = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(parsed, UserRole::User);
    }

    #[test]
    fn test_user_serialization_never_exposes_a_password() {
        let user = User {
            id: Uuid::new_v4(),
            email: "jane@example.com".to_string(),
            full_name: "Jane Doe".to_string(),
            is_active: true,
            roles: vec!["user".to_string()],
        };

        let value = serde_json::to_value(&user).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(|k| k.as_str())
            .collect();
        assert!(!keys.contains(&"password"));
        assert!(keys.contains(&"email"));
        assert!(keys.contains(&"roles"));
    }

    #[test]
    fn test_create_user_dto_validation() {
        let dto = CreateUserDto {
            email: "jane@example.com".to_string(),
            password: "secret123".to_string(),
            full_name: "Jane Doe".to_string(),
        };
        assert!(dto.validate().is_ok());

        let bad_email = CreateUserDto {
            email: "not-an-email".to_string(),
            ..dto.clone()
        };
        assert!(bad_email.validate().is_err());

        let short_password = CreateUserDto {
            password: "short".to_string(),
            ..dto.clone()
        };
        assert!(short_password.validate().is_err());

        let empty_name = CreateUserDto {
            full_name: "".to_string(),
            ..dto
        };
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn test_login_user_dto_validation() {
        let dto = LoginUserDto {
            email: "jane@example.com".to_string(),
            password: "secret123".to_string(),
        };
        assert!(dto.validate().is_ok());

        let short_password = LoginUserDto {
            password: "abc".to_string(),
            ..dto.clone()
        };
        assert!(short_password.validate().is_err());

        let bad_email = LoginUserDto {
            email: "nope".to_string(),
            ..dto
        };
        assert!(bad_email.validate().is_err());
    }
}
