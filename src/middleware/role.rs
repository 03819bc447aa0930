//! Role-based authorization middleware for Axum
//!
//! A route declares which roles may call it by attaching a
//! [`RequiredRoles`] extension; the [`user_role_guard`] middleware
//! authenticates the request and enforces that declaration. The two are
//! deliberately separate so a router can tag routes in one place and
//! apply the guard in another; [`protect`] composes them for the
//! common case.

use anyhow::anyhow;
use axum::{
    Extension, Router, middleware,
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};

use crate::middleware::auth::AuthUser;
use crate::modules::auth::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Role requirement attached to a route as an extension.
///
/// An empty slice (or no tag at all) means the route requires a valid
/// token but no particular role.
#[derive(Debug, Clone, Copy)]
pub struct RequiredRoles(pub &'static [UserRole]);

/// Middleware that authenticates the request and enforces the route's
/// [`RequiredRoles`] tag.
///
/// On success the verified principal is attached to the request, so
/// handlers and extractors downstream reuse it instead of verifying the
/// token a second time. A missing or invalid token is a 401; a valid
/// token without the required roles is a 403.
pub async fn user_role_guard(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    let required = parts
        .extensions
        .get::<RequiredRoles>()
        .map(|roles| roles.0)
        .unwrap_or(&[]);

    if !required.is_empty() && !auth_user.has_any_role(required) {
        return Err(AppError::forbidden(anyhow!(
            "User {} needs one of these roles: {}",
            auth_user.email(),
            required
                .iter()
                .map(|role| role.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )));
    }

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(auth_user);

    Ok(next.run(req).await)
}

/// Wraps a router in the full guard chain: a role tag plus the guard
/// that enforces it.
///
/// The tag layer is added after the guard so it sits outermost and the
/// tag is present on the request by the time the guard reads it. Pass an
/// empty slice for authentication without a role requirement.
pub fn protect(
    router: Router<AppState>,
    state: AppState,
    roles: &'static [UserRole],
) -> Router<AppState> {
    router
        .route_layer(middleware::from_fn_with_state(state, user_role_guard))
        .route_layer(Extension(RequiredRoles(roles)))
}
