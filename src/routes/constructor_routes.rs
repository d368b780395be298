use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use validator::Validate;
use crate::controllers::constructor_controller::ConstructorController;
use crate::dto::pagination_dto::{PaginatedResponse, PaginationParams};
use crate::models::constructor::Constructor;
use crate::state::AppState;
use crate::utils::extractors::{ApiPath, ApiQuery};
use crate::utils::errors::AppError;

pub fn create_constructor_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_constructors))
        .route("/:constructor_id", get(get_constructor))
}

async fn list_constructors(
    State(state): State<AppState>,
    ApiQuery(pagination): ApiQuery<PaginationParams>,
) -> Result<Json<PaginatedResponse<Constructor>>, AppError> {
    pagination.validate()?;
    let controller = ConstructorController::new(state.pool.clone());
    let response = controller.list(pagination).await?;
    Ok(Json(response))
}

async fn get_constructor(
    State(state): State<AppState>,
    ApiPath(constructor_id): ApiPath<i64>,
) -> Result<Json<Constructor>, AppError> {
    let controller = ConstructorController::new(state.pool.clone());
    let response = controller.get_by_id(constructor_id).await?;
    Ok(Json(response))
}
