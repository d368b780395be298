use crate::models::constructor::Constructor;
use crate::utils::errors::AppError;
use sqlx::SqlitePool;

pub struct ConstructorRepository {
    pool: SqlitePool,
}

impl ConstructorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Constructor>, AppError> {
        let constructors = sqlx::query_as::<_, Constructor>(
            r#"
            SELECT constructorId, constructorRef, name, nationality, url
            FROM constructors
            ORDER BY name ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(constructors)
    }

    pub async fn find_by_id(&self, constructor_id: i64) -> Result<Option<Constructor>, AppError> {
        let constructor = sqlx::query_as::<_, Constructor>(
            r#"
            SELECT constructorId, constructorRef, name, nationality, url
            FROM constructors
            WHERE constructorId = ?
            "#,
        )
        .bind(constructor_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(constructor)
    }
}
