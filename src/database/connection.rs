//! Conexión a PostgreSQL

use anyhow::{Context, Result};
use sqlx::migrate::Migrator;
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;

/// Migraciones embebidas desde `migrations/`
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        info!(url = %mask_database_url(&config.url), "🔌 connecting database");
        let pool = config
            .create_pool()
            .await
            .context("failed to connect to database")?;

        Ok(Self { pool })
    }

    /// Ejecutar migraciones de la base de datos
    pub async fn migrate(&self) -> Result<()> {
        info!("📦 running migrations");
        MIGRATOR
            .run(&self.pool)
            .await
            .context("failed to migrate database")?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Función helper para enmascarar la URL de la base de datos en logs
fn mask_database_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    match url.rfind('@') {
        Some(at_pos) if at_pos > scheme_end => {
            format!("{}***:***@{}", &url[..scheme_end + 3], &url[at_pos + 1..])
        }
        _ => url.to_string(),
    }
}
