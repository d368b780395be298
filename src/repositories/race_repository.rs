use crate::models::race::{Race, RaceDetail, RaceSummary};
use crate::utils::errors::AppError;
use crate::utils::validation::YearBounds;
use sqlx::SqlitePool;

pub struct RaceRepository {
    pool: SqlitePool,
}

impl RaceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Última temporada del dataset; `None` si races está vacía
    pub async fn max_year(&self) -> Result<Option<i64>, AppError> {
        let max_year: Option<i64> = sqlx::query_scalar("SELECT MAX(year) FROM races")
            .fetch_one(&self.pool)
            .await?;

        Ok(max_year)
    }

    pub async fn year_bounds(&self) -> Result<Option<YearBounds>, AppError> {
        let (min_year, max_year): (Option<i64>, Option<i64>) =
            sqlx::query_as("SELECT MIN(year), MAX(year) FROM races")
                .fetch_one(&self.pool)
                .await?;

        Ok(YearBounds::from_aggregate(min_year, max_year))
    }

    pub async fn find_by_year(
        &self,
        year: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Race>, AppError> {
        let races = sqlx::query_as::<_, Race>(
            r#"
            SELECT raceId, year, round, circuitId, name, date, time, url
            FROM races
            WHERE year = ?
            ORDER BY round ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(year)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(races)
    }

    pub async fn find_detail_by_id(&self, race_id: i64) -> Result<Option<RaceDetail>, AppError> {
        let race = sqlx::query_as::<_, RaceDetail>(
            r#"
            SELECT
                r.raceId, r.year, r.round, r.circuitId, r.name, r.date, r.time, r.url,
                c.circuitRef,
                c.name AS circuitName,
                c.location, c.country, c.lat, c.lng,
                CASE WHEN typeof(c.alt) = 'integer' THEN c.alt END AS alt,
                c.url AS circuitUrl
            FROM races r
            JOIN circuits c ON c.circuitId = r.circuitId
            WHERE r.raceId = ?
            "#,
        )
        .bind(race_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(race)
    }

    pub async fn find_summary_by_id(&self, race_id: i64) -> Result<Option<RaceSummary>, AppError> {
        let race = sqlx::query_as::<_, RaceSummary>(
            "SELECT raceId, year, round, name, date FROM races WHERE raceId = ?",
        )
        .bind(race_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(race)
    }
}
