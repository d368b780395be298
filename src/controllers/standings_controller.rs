use crate::dto::pagination_dto::{PaginatedResponse, PaginationParams};
use crate::dto::season_dto::StandingsResponse;
use crate::models::standings::{ConstructorStanding, DriverStanding};
use crate::repositories::race_repository::RaceRepository;
use crate::repositories::standings_repository::StandingsRepository;
use crate::services::standings_service::assign_ranks;
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_year_in_bounds, YearBounds};
use sqlx::SqlitePool;

pub struct StandingsController {
    repository: StandingsRepository,
    races: RaceRepository,
}

impl StandingsController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: StandingsRepository::new(pool.clone()),
            races: RaceRepository::new(pool),
        }
    }

    /// Rango de temporadas disponible
    pub async fn bounds(&self) -> Result<Option<YearBounds>, AppError> {
        self.races.year_bounds().await
    }

    pub async fn drivers(
        &self,
        year: i64,
        pagination: PaginationParams,
    ) -> Result<StandingsResponse<DriverStanding>, AppError> {
        validate_year_in_bounds(year, self.bounds().await?)?;

        let rows = self
            .repository
            .driver_standings(year, pagination.limit, pagination.offset)
            .await?;

        Ok(StandingsResponse {
            year,
            page: PaginatedResponse::new(assign_ranks(rows, pagination.offset), pagination),
        })
    }

    pub async fn constructors(
        &self,
        year: i64,
        pagination: PaginationParams,
    ) -> Result<StandingsResponse<ConstructorStanding>, AppError> {
        validate_year_in_bounds(year, self.bounds().await?)?;

        let rows = self
            .repository
            .constructor_standings(year, pagination.limit, pagination.offset)
            .await?;

        Ok(StandingsResponse {
            year,
            page: PaginatedResponse::new(assign_ranks(rows, pagination.offset), pagination),
        })
    }
}
