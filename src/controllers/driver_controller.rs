use crate::dto::pagination_dto::{PaginatedResponse, PaginationParams};
use crate::dto::season_dto::SeasonSummaryResponse;
use crate::models::driver::Driver;
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::race_repository::RaceRepository;
use crate::repositories::result_repository::ResultRepository;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::validate_year_in_bounds;
use sqlx::SqlitePool;
use tracing::debug;

pub struct DriverController {
    repository: DriverRepository,
    races: RaceRepository,
    results: ResultRepository,
}

impl DriverController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: DriverRepository::new(pool.clone()),
            races: RaceRepository::new(pool.clone()),
            results: ResultRepository::new(pool),
        }
    }

    pub async fn list(&self, pagination: PaginationParams) -> Result<PaginatedResponse<Driver>, AppError> {
        let drivers = self
            .repository
            .find_page(pagination.limit, pagination.offset)
            .await?;

        Ok(PaginatedResponse::new(drivers, pagination))
    }

    pub async fn get_by_id(&self, driver_id: i64) -> Result<Driver, AppError> {
        self.repository
            .find_by_id(driver_id)
            .await?
            .ok_or_else(|| not_found_error("Driver", driver_id))
    }

    /// Resumen de temporada de un piloto.
    ///
    /// El año se valida antes que el piloto: un año fuera de rango es
    /// BadRequest exista o no el piloto. Un piloto que no corrió ese año
    /// recibe un resumen a cero, no un error.
    pub async fn season_summary(
        &self,
        driver_id: i64,
        year: i64,
        include_results: bool,
    ) -> Result<SeasonSummaryResponse, AppError> {
        validate_year_in_bounds(year, self.races.year_bounds().await?)?;

        if !self.repository.exists(driver_id).await? {
            return Err(not_found_error("Driver", driver_id));
        }

        let totals = self.results.season_totals(driver_id, year).await?;
        debug!(driver_id, year, starts = totals.starts, "season totals computed");

        let results = if include_results {
            Some(self.results.find_by_driver_and_year(driver_id, year).await?)
        } else {
            None
        };

        Ok(SeasonSummaryResponse {
            driver_id,
            year,
            totals,
            results,
        })
    }
}
