use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::instrument;
use utoipa::ToSchema;

use crate::middleware::auth::AuthUser;
use crate::middleware::headers::RawHeaders;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{
    AuthStatusResponse, CreateUserDto, LoginUserDto, PrivateRouteResponse, RoleCheckedResponse,
    User,
};
use super::service::AuthService;

/// Lifetime of the login session cookie in seconds.
const TOKEN_COOKIE_MAX_AGE_SECS: i64 = 24 * 60 * 60;

/// JSON body every error status responds with.
#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Builds the session cookie carrying the access token. `Secure` is set
/// only for production deployments, which are assumed to sit behind TLS.
fn session_cookie(token: String, is_production: bool) -> Cookie<'static> {
    Cookie::build(("token", token))
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(is_production)
        .path("/")
        .max_age(time::Duration::seconds(TOKEN_COOKIE_MAX_AGE_SECS))
        .build()
}

/// Create an account from an email, password and display name
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Account created; returns the public user fields", body = User),
        (status = 400, description = "Malformed payload or email already registered", body = ErrorResponse),
        (status = 422, description = "Payload failed validation", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    ),
    tag = "Auth"
)]
#[instrument(skip(state, dto))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = AuthService::create_user(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Login with email and password
///
/// The signed token never appears in the response body; it travels in an
/// HTTP-only `token` cookie instead.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginUserDto,
    responses(
        (status = 200, description = "Credentials accepted; the session cookie carries the token", body = User),
        (status = 401, description = "Unknown email, wrong password or deactivated account", body = ErrorResponse),
        (status = 400, description = "Malformed payload", body = ErrorResponse),
        (status = 422, description = "Payload failed validation", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    ),
    tag = "Auth"
)]
#[instrument(skip(state, jar, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<LoginUserDto>,
) -> Result<(CookieJar, Json<User>), AppError> {
    let login = AuthService::login_user(&state.db, dto, &state.jwt_config).await?;

    let cookie = session_cookie(
        login.token,
        state.server_config.environment.is_production(),
    );

    Ok((jar.add(cookie), Json(login.user)))
}

/// Check the calling principal's authentication status
#[utoipa::path(
    get,
    path = "/auth/check-status",
    responses(
        (status = 200, description = "The stored user plus a re-issued token", body = AuthStatusResponse),
        (status = 401, description = "No valid token, or the account is gone or deactivated", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    ),
    tag = "Auth"
)]
#[instrument(skip(state, auth_user))]
pub async fn check_auth_status(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<AuthStatusResponse>, AppError> {
    let status = AuthService::check_auth_status(&state.db, &auth_user, &state.jwt_config).await?;
    Ok(Json(status))
}

/// Demonstration route guarded by the bare token check
#[utoipa::path(
    get,
    path = "/auth/private",
    responses(
        (status = 200, description = "The principal, their email and the raw request headers", body = PrivateRouteResponse),
        (status = 401, description = "No valid token", body = ErrorResponse)
    ),
    tag = "Auth"
)]
#[instrument(skip_all)]
pub async fn private_route(
    auth_user: AuthUser,
    RawHeaders(raw_headers): RawHeaders,
) -> Result<Json<PrivateRouteResponse>, AppError> {
    let user_email = auth_user.email().to_string();
    let user = auth_user.principal()?;

    Ok(Json(PrivateRouteResponse {
        user,
        user_email,
        raw_headers,
    }))
}

/// Demonstration route guarded by an explicit role tag plus the role guard
#[utoipa::path(
    get,
    path = "/auth/private2",
    responses(
        (status = 200, description = "Principal carries one of the required roles", body = RoleCheckedResponse),
        (status = 401, description = "No valid token", body = ErrorResponse),
        (status = 403, description = "Authenticated but missing every required role", body = ErrorResponse)
    ),
    tag = "Auth"
)]
#[instrument(skip_all)]
pub async fn private_route2(auth_user: AuthUser) -> Result<Json<RoleCheckedResponse>, AppError> {
    Ok(Json(RoleCheckedResponse {
        ok: true,
        user: auth_user.principal()?,
    }))
}

/// Demonstration route guarded by the composed protection helper
#[utoipa::path(
    get,
    path = "/auth/private3",
    responses(
        (status = 200, description = "Principal authenticated", body = RoleCheckedResponse),
        (status = 401, description = "No valid token", body = ErrorResponse)
    ),
    tag = "Auth"
)]
#[instrument(skip_all)]
pub async fn private_route3(auth_user: AuthUser) -> Result<Json<RoleCheckedResponse>, AppError> {
    Ok(Json(RoleCheckedResponse {
        ok: true,
        user: auth_user.principal()?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_flags() {
        let cookie = session_cookie("token-value".to_string(), false);

        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.value(), "token-value");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(
            cookie.max_age(),
            Some(time::Duration::seconds(24 * 60 * 60))
        );
        assert_ne!(cookie.secure(), Some(true));
    }

    #[test]
    fn test_session_cookie_is_secure_in_production() {
        let cookie = session_cookie("token-value".to_string(), true);
        assert_eq!(cookie.secure(), Some(true));
    }
}
