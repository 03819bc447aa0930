//! Environment-driven configuration.
//!
//! Each section is its own struct with a `from_env()` constructor and
//! documented defaults: [`cors`] for allowed origins, [`database`] for
//! the connection pool, [`jwt`] for token signing, and [`server`] for
//! the bind address and runtime mode.

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;
