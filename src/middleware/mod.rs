//! Middleware modules for request processing.
//!
//! This module contains middleware and extractors for handling
//! cross-cutting concerns: authentication, role-based authorization,
//! and request-header access.
//!
//! # Modules
//!
//! - [`auth`]: The [`auth::AuthUser`] extractor that validates access tokens
//! - [`headers`]: The [`headers::RawHeaders`] extractor
//! - [`role`]: Route role tags and the guard that enforces them
//!
//! # Authorization Flow
//!
//! 1. Client sends a request with `Authorization: Bearer <token>` or the
//!    `token` cookie set at login
//! 2. For tagged routes, [`role::user_role_guard`] validates the token,
//!    checks the [`role::RequiredRoles`] tag and attaches the principal
//!    to the request
//! 3. Handlers receive the principal through the [`auth::AuthUser`]
//!    extractor, which reuses the attached principal or validates the
//!    token itself on untagged routes

pub mod auth;
pub mod headers;
pub mod role;
