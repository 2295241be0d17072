use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::auth::token::{JwtCodec, TokenCodec};
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
    pub tokens: Arc<dyn TokenCodec>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let opts = SqliteConnectOptions::from_str(&config.database_url)
            .context("parse DATABASE_URL")?
            .create_if_missing(true);
        let db = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .context("connect to database")?;

        let tokens = Arc::new(JwtCodec::new(&config.jwt.secret)) as Arc<dyn TokenCodec>;

        Ok(Self { db, config, tokens })
    }

    pub fn from_parts(db: SqlitePool, config: Arc<AppConfig>, tokens: Arc<dyn TokenCodec>) -> Self {
        Self { db, config, tokens }
    }
}
