use sqlx::PgPool;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::jwt::JwtConfig;
use crate::config::server::ServerConfig;

/// Shared application state, cloned into every handler. The pool is
/// internally reference-counted, so cloning is cheap.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub server_config: ServerConfig,
}

impl AppState {
    /// Connects the database pool and loads every config section from
    /// the environment.
    pub async fn init() -> Self {
        Self {
            db: init_db_pool().await,
            jwt_config: JwtConfig::from_env(),
            cors_config: CorsConfig::from_env(),
            server_config: ServerConfig::from_env(),
        }
    }
}
