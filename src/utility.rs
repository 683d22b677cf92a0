use std::time::Duration;

use chrono::NaiveDateTime;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::PgConnection;
use eyre::Report;
use secrecy::ExposeSecret;
use tracing::info;

use crate::config::app_config::AppConfig;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

pub fn create_db_pool(config: &AppConfig) -> Result<DbPool, Report> {
    let manager = ConnectionManager::<PgConnection>::new(config.database_url.expose_secret());

    let pool = Pool::builder()
        .max_size(config.db_pool_max_size)
        .min_idle(Some(1))
        .connection_timeout(Duration::from_secs(8))
        .idle_timeout(Some(Duration::from_secs(300)))
        .test_on_check_out(true)
        .build(manager)?;

    info!(
        "PostgreSQL connection pool created (max_size: {})",
        config.db_pool_max_size
    );

    Ok(pool)
}

/// Parses the timestamps the frontend sends ("2025-06-01 10:30:00"), plus
/// the minute-precision and `T`-separated variants.
pub fn parse_fecha_hora(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let trimmed = raw.trim();
    for formato in [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ] {
        if let Ok(fecha) = NaiveDateTime::parse_from_str(trimmed, formato) {
            return Ok(fecha);
        }
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S")
}

/// Minute precision, the format the frontend displays verbatim.
pub fn format_fecha_hora(fecha: &NaiveDateTime) -> String {
    fecha.format("%Y-%m-%d %H:%M").to_string()
}
