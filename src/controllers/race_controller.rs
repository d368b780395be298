use crate::dto::pagination_dto::{PaginatedResponse, PaginationParams};
use crate::dto::race_dto::{RaceListResponse, RaceResultsResponse};
use crate::models::race::RaceDetail;
use crate::repositories::race_repository::RaceRepository;
use crate::repositories::result_repository::ResultRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::SqlitePool;

pub struct RaceController {
    repository: RaceRepository,
    results: ResultRepository,
}

impl RaceController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: RaceRepository::new(pool.clone()),
            results: ResultRepository::new(pool),
        }
    }

    /// Carreras de una temporada ordenadas por round.
    ///
    /// Sin año se usa la última temporada del dataset, consultada en cada
    /// llamada. El año explícito no se valida: fuera de rango devuelve una
    /// página vacía.
    pub async fn list(
        &self,
        year: Option<i64>,
        pagination: PaginationParams,
    ) -> Result<RaceListResponse, AppError> {
        let year = match year {
            Some(year) => Some(year),
            None => self.repository.max_year().await?,
        };

        let races = match year {
            Some(year) => {
                self.repository
                    .find_by_year(year, pagination.limit, pagination.offset)
                    .await?
            }
            None => Vec::new(),
        };

        Ok(RaceListResponse {
            year,
            page: PaginatedResponse::new(races, pagination),
        })
    }

    pub async fn get_by_id(&self, race_id: i64) -> Result<RaceDetail, AppError> {
        self.repository
            .find_detail_by_id(race_id)
            .await?
            .ok_or_else(|| not_found_error("Race", race_id))
    }

    pub async fn results(
        &self,
        race_id: i64,
        pagination: PaginationParams,
    ) -> Result<RaceResultsResponse, AppError> {
        // Verificar que la carrera existe antes de consultar resultados
        let race = self
            .repository
            .find_summary_by_id(race_id)
            .await?
            .ok_or_else(|| not_found_error("Race", race_id))?;

        let results = self
            .results
            .find_by_race(race_id, pagination.limit, pagination.offset)
            .await?;

        Ok(RaceResultsResponse {
            race,
            page: PaginatedResponse::new(results, pagination),
        })
    }
}
