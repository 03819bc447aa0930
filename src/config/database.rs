use std::env;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Number of pooled Postgres connections.
const MAX_CONNECTIONS: u32 = 10;

/// Opens the PostgreSQL pool described by `DATABASE_URL`.
///
/// Connects eagerly so a misconfigured deployment fails at startup
/// instead of on the first request.
///
/// # Panics
///
/// Panics when `DATABASE_URL` is unset or the database is unreachable.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database")
}
