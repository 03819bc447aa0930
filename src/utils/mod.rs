//! Shared building blocks: the [`errors`] application error type,
//! [`jwt`] token signing and verification, and [`password`] hashing.

pub mod errors;
pub mod jwt;
pub mod password;
