use crate::models::result::{RaceResult, SeasonRaceResult};
use crate::models::standings::SeasonTotals;
use crate::utils::errors::AppError;
use sqlx::SqlitePool;

pub struct ResultRepository {
    pool: SqlitePool,
}

impl ResultRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_race(
        &self,
        race_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<RaceResult>, AppError> {
        let results = sqlx::query_as::<_, RaceResult>(
            r#"
            SELECT
                res.resultId,
                res.driverId,
                d.forename || ' ' || d.surname AS driverName,
                res.constructorId,
                c.name AS constructorName,
                res.number, res.grid, res.position, res.positionOrder,
                CAST(COALESCE(res.points, 0) AS REAL) AS points,
                res.laps, res.time,
                CASE WHEN typeof(res.milliseconds) = 'integer' THEN res.milliseconds END AS milliseconds,
                res.fastestLap, res.fastestLapTime,
                res.statusId,
                s.status
            FROM results res
            JOIN drivers d ON d.driverId = res.driverId
            JOIN constructors c ON c.constructorId = res.constructorId
            JOIN status s ON s.statusId = res.statusId
            WHERE res.raceId = ?
            ORDER BY res.positionOrder ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(race_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(results)
    }

    /// Totales de temporada; sin filas, todos los agregados caen a cero
    pub async fn season_totals(&self, driver_id: i64, year: i64) -> Result<SeasonTotals, AppError> {
        let totals = sqlx::query_as::<_, SeasonTotals>(
            r#"
            SELECT
                CAST(COALESCE(SUM(res.points), 0) AS REAL) AS points,
                COALESCE(SUM(CASE WHEN res.positionOrder = 1 THEN 1 ELSE 0 END), 0) AS wins,
                COALESCE(SUM(CASE WHEN res.positionOrder BETWEEN 1 AND 3 THEN 1 ELSE 0 END), 0) AS podiums,
                COUNT(*) AS starts
            FROM results res
            JOIN races r ON r.raceId = res.raceId
            WHERE res.driverId = ? AND r.year = ?
            "#,
        )
        .bind(driver_id)
        .bind(year)
        .fetch_one(&self.pool)
        .await?;

        Ok(totals)
    }

    pub async fn find_by_driver_and_year(
        &self,
        driver_id: i64,
        year: i64,
    ) -> Result<Vec<SeasonRaceResult>, AppError> {
        let results = sqlx::query_as::<_, SeasonRaceResult>(
            r#"
            SELECT
                r.raceId,
                r.round,
                r.name AS raceName,
                res.position,
                res.positionOrder,
                CAST(COALESCE(res.points, 0) AS REAL) AS points,
                c.name AS constructorName,
                s.status
            FROM results res
            JOIN races r ON r.raceId = res.raceId
            JOIN constructors c ON c.constructorId = res.constructorId
            JOIN status s ON s.statusId = res.statusId
            WHERE res.driverId = ? AND r.year = ?
            ORDER BY r.round ASC
            "#,
        )
        .bind(driver_id)
        .bind(year)
        .fetch_all(&self.pool)
        .await?;

        Ok(results)
    }
}
