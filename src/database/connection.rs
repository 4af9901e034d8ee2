use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use tracing::info;

use crate::configuration::settings::DatabaseSettings;

pub type DbPool = MySqlPool;

pub fn connect_options(settings: &DatabaseSettings) -> MySqlConnectOptions {
    let options = MySqlConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.user)
        .database(&settings.name);

    match settings.password.as_deref() {
        Some(password) => options.password(password),
        None => options,
    }
}

fn pool_options(settings: &DatabaseSettings) -> MySqlPoolOptions {
    MySqlPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
}

/// Opens one connection to confirm the database is reachable.
pub async fn check_connection(
    pool: &DbPool,
    settings: &DatabaseSettings,
) -> Result<(), sqlx::Error> {
    pool.acquire().await?;

    info!(
        host = settings.host.as_str(),
        database = settings.name.as_str(),
        "Connected to the database."
    );

    Ok(())
}

/// Builds a pool that only opens connections when a query needs one.
pub fn create_lazy_pool(settings: &DatabaseSettings) -> DbPool {
    pool_options(settings).connect_lazy_with(connect_options(settings))
}

pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations applied.");

    Ok(())
}
