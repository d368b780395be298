//! Consultas de clasificación por temporada
//!
//! Orden: points DESC, wins DESC. No hay tercera clave: filas empatadas en
//! ambas conservan el orden que devuelva SQLite, que no es determinista.

use crate::models::standings::{ConstructorStanding, DriverStanding};
use crate::utils::errors::AppError;
use sqlx::SqlitePool;

pub struct StandingsRepository {
    pool: SqlitePool,
}

impl StandingsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn driver_standings(
        &self,
        year: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<DriverStanding>, AppError> {
        let standings = sqlx::query_as::<_, DriverStanding>(
            r#"
            SELECT
                d.driverId, d.driverRef, d.code, d.forename, d.surname, d.nationality,
                CAST(COALESCE(SUM(res.points), 0) AS REAL) AS points,
                SUM(CASE WHEN res.positionOrder = 1 THEN 1 ELSE 0 END) AS wins,
                COUNT(*) AS starts
            FROM results res
            JOIN races r ON r.raceId = res.raceId
            JOIN drivers d ON d.driverId = res.driverId
            WHERE r.year = ?
            GROUP BY d.driverId
            ORDER BY points DESC, wins DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(year)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(standings)
    }

    pub async fn constructor_standings(
        &self,
        year: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ConstructorStanding>, AppError> {
        let standings = sqlx::query_as::<_, ConstructorStanding>(
            r#"
            SELECT
                c.constructorId, c.constructorRef, c.name, c.nationality,
                CAST(COALESCE(SUM(res.points), 0) AS REAL) AS points,
                SUM(CASE WHEN res.positionOrder = 1 THEN 1 ELSE 0 END) AS wins,
                COUNT(*) AS starts
            FROM results res
            JOIN races r ON r.raceId = res.raceId
            JOIN constructors c ON c.constructorId = res.constructorId
            WHERE r.year = ?
            GROUP BY c.constructorId
            ORDER BY points DESC, wins DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(year)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(standings)
    }
}
