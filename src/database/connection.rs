//! Conexión al dataset SQLite
//!
//! Abre el pool de solo lectura y verifica que el dataset cargado por el
//! loader externo responde antes de aceptar requests.

use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::config::DatabaseConfig;

/// Pool de conexiones compartido por todos los requests
#[derive(Clone)]
pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    /// Abrir el pool y comprobar la conexión
    pub async fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        info!("🗄️  Abriendo dataset en {}", config.url);
        let pool = config.create_pool().await?;
        let connection = Self { pool };
        connection.ping().await?;
        connection.log_dataset_range().await?;
        Ok(connection)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Verificar que la conexión funciona
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Registrar el rango de temporadas disponible, igual que el chequeo final del loader
    async fn log_dataset_range(&self) -> Result<(), sqlx::Error> {
        let (min_year, max_year): (Option<i64>, Option<i64>) =
            sqlx::query_as("SELECT MIN(year), MAX(year) FROM races")
                .fetch_one(&self.pool)
                .await?;

        match (min_year, max_year) {
            (Some(min), Some(max)) => info!("✅ Temporadas en races: {}–{}", min, max),
            _ => warn!("⚠️  La tabla races está vacía"),
        }
        Ok(())
    }
}
