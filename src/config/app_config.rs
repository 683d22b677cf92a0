use eyre::Report;
use secrecy::SecretString;
use std::env;

/// Runtime configuration, resolved once at startup and passed down
/// explicitly. Nothing reads the environment after this.
#[derive(Debug)]
pub struct AppConfig {
    pub database_url: SecretString,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub db_pool_max_size: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            database_url: SecretString::new(Box::from(
                env::var("DATABASE_URL").map_err(|_| eyre::eyre!("DATABASE_URL must be set"))?,
            )),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: env::var("PORT").unwrap_or_else(|_| "5000".into()).parse()?,
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            db_pool_max_size: env::var("DB_POOL_MAX_SIZE")
                .unwrap_or_else(|_| "10".into())
                .parse()?,
        })
    }
}
