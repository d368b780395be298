use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use validator::Validate;
use crate::controllers::driver_controller::DriverController;
use crate::dto::pagination_dto::{PaginatedResponse, PaginationParams};
use crate::dto::season_dto::{SeasonSummaryParams, SeasonSummaryResponse};
use crate::models::driver::Driver;
use crate::state::AppState;
use crate::utils::extractors::{ApiPath, ApiQuery};
use crate::utils::errors::AppError;

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_drivers))
        .route("/:driver_id", get(get_driver))
        .route("/:driver_id/seasons/:year", get(get_driver_season))
}

async fn list_drivers(
    State(state): State<AppState>,
    ApiQuery(pagination): ApiQuery<PaginationParams>,
) -> Result<Json<PaginatedResponse<Driver>>, AppError> {
    pagination.validate()?;
    let controller = DriverController::new(state.pool.clone());
    let response = controller.list(pagination).await?;
    Ok(Json(response))
}

async fn get_driver(
    State(state): State<AppState>,
    ApiPath(driver_id): ApiPath<i64>,
) -> Result<Json<Driver>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.get_by_id(driver_id).await?;
    Ok(Json(response))
}

async fn get_driver_season(
    State(state): State<AppState>,
    ApiPath((driver_id, year)): ApiPath<(i64, i64)>,
    ApiQuery(params): ApiQuery<SeasonSummaryParams>,
) -> Result<Json<SeasonSummaryResponse>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller
        .season_summary(driver_id, year, params.include_results)
        .await?;
    Ok(Json(response))
}
