use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{
    AuthStatusResponse, CreateUserDto, LoginUserDto, Principal, PrivateRouteResponse,
    RoleCheckedResponse, User, UserRole,
};

/// OpenAPI description of the HTTP surface, served through Scalar.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Keyward API",
        version = "0.1.0",
        description = "Registration, cookie-based login and role-protected routes, built with Rust, Axum, and PostgreSQL.",
        license(name = "MIT")
    ),
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::check_auth_status,
        crate::modules::auth::controller::private_route,
        crate::modules::auth::controller::private_route2,
        crate::modules::auth::controller::private_route3,
    ),
    components(schemas(
        User,
        UserRole,
        Principal,
        CreateUserDto,
        LoginUserDto,
        AuthStatusResponse,
        PrivateRouteResponse,
        RoleCheckedResponse,
        ErrorResponse,
    )),
    modifiers(&BearerSecurity),
    tags(
        (name = "Auth", description = "User registration, login and route protection")
    )
)]
pub struct ApiDoc;

/// Registers the bearer-token scheme so protected endpoints can be tried
/// from the docs UI.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let Some(components) = openapi.components.as_mut() else {
            return;
        };

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
