use crate::models::driver::Driver;
use crate::utils::errors::AppError;
use sqlx::SqlitePool;

pub struct DriverRepository {
    pool: SqlitePool,
}

impl DriverRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Driver>, AppError> {
        let drivers = sqlx::query_as::<_, Driver>(
            r#"
            SELECT driverId, driverRef, number, code, forename, surname, dob, nationality, url
            FROM drivers
            ORDER BY surname ASC, forename ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(drivers)
    }

    pub async fn find_by_id(&self, driver_id: i64) -> Result<Option<Driver>, AppError> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            SELECT driverId, driverRef, number, code, forename, surname, dob, nationality, url
            FROM drivers
            WHERE driverId = ?
            "#,
        )
        .bind(driver_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(driver)
    }

    pub async fn exists(&self, driver_id: i64) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM drivers WHERE driverId = ?)")
                .bind(driver_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }
}
