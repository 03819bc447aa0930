use axum::{
    Extension, Router, middleware,
    routing::{get, post},
};

use crate::middleware::role::{RequiredRoles, protect, user_role_guard};
use crate::modules::auth::model::UserRole;
use crate::state::AppState;

use super::controller::{
    check_auth_status, login_user, private_route, private_route2, private_route3, register_user,
};

/// Builds the auth routes, each demonstrating one authorization style:
/// `/private` relies on the `AuthUser` extractor alone, `/private2`
/// declares its role tag and guard explicitly, and `/check-status` and
/// `/private3` use the composed [`protect`] helper.
pub fn init_auth_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/register", post(register_user))
        .route("/login", post(login_user))
        .merge(protect(
            Router::new().route("/check-status", get(check_auth_status)),
            state.clone(),
            &[],
        ))
        .route("/private", get(private_route))
        .merge(
            Router::new()
                .route("/private2", get(private_route2))
                .route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    user_role_guard,
                ))
                .route_layer(Extension(RequiredRoles(&[
                    UserRole::SuperUser,
                    UserRole::Admin,
                ]))),
        )
        .merge(protect(
            Router::new().route("/private3", get(private_route3)),
            state,
            &[],
        ))
}
