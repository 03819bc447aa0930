//! # Keyward API
//!
//! An Axum + PostgreSQL backend for user accounts: registration, login
//! with a session cookie, and role-guarded routes.
//!
//! ## Overview
//!
//! - **Registration** creates accounts with normalized, unique emails
//!   and bcrypt-hashed passwords; every account starts with the base
//!   `user` role.
//! - **Login** signs a JWT carrying the user's id, email and roles and
//!   delivers it in an HTTP-only `token` cookie (`SameSite=Strict`,
//!   `Max-Age` one day, `Secure` in production). The token never
//!   appears in a response body.
//! - **Protected routes** accept the cookie or an `Authorization:
//!   Bearer` header and enforce per-route role requirements.
//! - **Privileged accounts** come from the `create-superuser` CLI
//!   command; the HTTP surface never grants elevated roles.
//!
//! ## Layout
//!
//! NestJS-style feature modules, one directory per feature:
//!
//! ```text
//! src/
//! ├── cli/              create-superuser command
//! ├── config/           from_env() config sections
//! ├── middleware/       AuthUser extractor, role guard, RawHeaders
//! ├── modules/auth/     controller / service / model / router
//! └── utils/            AppError, JWT signing, bcrypt hashing
//! ```
//!
//! ## Route protection
//!
//! Three styles, each used by one of the `/auth/private*` demonstration
//! endpoints:
//!
//! 1. The [`middleware::auth::AuthUser`] extractor alone, which only
//!    asserts a valid token.
//! 2. An explicit [`middleware::role::RequiredRoles`] tag layered with
//!    the [`middleware::role::user_role_guard`] middleware.
//! 3. The [`middleware::role::protect`] helper, which composes the tag
//!    and guard in one call.
//!
//! Role labels are `super-user`, `admin` and `user`; a route passes when
//! the principal carries any of its required labels.
//!
//! ## Running
//!
//! Configuration comes from the environment (or a `.env` file):
//! `DATABASE_URL` (required), `JWT_SECRET`, `JWT_ACCESS_EXPIRY`,
//! `CORS_ALLOWED_ORIGINS`, `HOST`, `PORT`, `ENVIRONMENT` (`production`
//! turns on the Secure cookie flag) and `RUST_LOG`. Migrations under
//! `migrations/` run automatically at startup, and the OpenAPI docs are
//! served at `/scalar`.
//!
//! Seed the first privileged account with:
//!
//! ```bash
//! cargo run -- create-superuser "Jane Doe" jane@example.com secret123
//! ```

pub mod cli;
pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
