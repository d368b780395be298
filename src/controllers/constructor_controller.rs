use crate::dto::pagination_dto::{PaginatedResponse, PaginationParams};
use crate::models::constructor::Constructor;
use crate::repositories::constructor_repository::ConstructorRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::SqlitePool;

pub struct ConstructorController {
    repository: ConstructorRepository,
}

impl ConstructorController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: ConstructorRepository::new(pool),
        }
    }

    pub async fn list(
        &self,
        pagination: PaginationParams,
    ) -> Result<PaginatedResponse<Constructor>, AppError> {
        let constructors = self
            .repository
            .find_page(pagination.limit, pagination.offset)
            .await?;

        Ok(PaginatedResponse::new(constructors, pagination))
    }

    pub async fn get_by_id(&self, constructor_id: i64) -> Result<Constructor, AppError> {
        self.repository
            .find_by_id(constructor_id)
            .await?
            .ok_or_else(|| not_found_error("Constructor", constructor_id))
    }
}
