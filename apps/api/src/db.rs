use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Host fragment identifying the managed Postgres provider. A connection
/// string pointing anywhere else is refused before a pool is ever built, so
/// the store falls back without waiting out a network timeout.
pub const MANAGED_HOST: &str = "supabase.co";

pub fn is_managed_url(database_url: &str) -> bool {
    database_url.contains(MANAGED_HOST)
}

/// Creates a PostgreSQL pool without connecting. The first query opens the
/// actual connection, keeping process startup independent of database
/// reachability.
pub fn lazy_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect_lazy(database_url)?;

    info!("PostgreSQL connection pool prepared (lazy connect)");
    Ok(pool)
}
