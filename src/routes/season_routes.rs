use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use validator::Validate;
use crate::controllers::standings_controller::StandingsController;
use crate::dto::pagination_dto::PaginationParams;
use crate::dto::season_dto::StandingsResponse;
use crate::models::standings::{ConstructorStanding, DriverStanding};
use crate::state::AppState;
use crate::utils::extractors::{ApiPath, ApiQuery};
use crate::utils::errors::{bad_request_error, AppError};
use crate::utils::validation::YearBounds;

pub fn create_season_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_season_bounds))
        .route("/:year/driver-standings", get(get_driver_standings))
        .route("/:year/constructor-standings", get(get_constructor_standings))
}

async fn get_season_bounds(
    State(state): State<AppState>,
) -> Result<Json<YearBounds>, AppError> {
    let controller = StandingsController::new(state.pool.clone());
    let bounds = controller
        .bounds()
        .await?
        .ok_or_else(|| bad_request_error("no seasons are available in the dataset"))?;
    Ok(Json(bounds))
}

async fn get_driver_standings(
    State(state): State<AppState>,
    ApiPath(year): ApiPath<i64>,
    ApiQuery(pagination): ApiQuery<PaginationParams>,
) -> Result<Json<StandingsResponse<DriverStanding>>, AppError> {
    pagination.validate()?;
    let controller = StandingsController::new(state.pool.clone());
    let response = controller.drivers(year, pagination).await?;
    Ok(Json(response))
}

async fn get_constructor_standings(
    State(state): State<AppState>,
    ApiPath(year): ApiPath<i64>,
    ApiQuery(pagination): ApiQuery<PaginationParams>,
) -> Result<Json<StandingsResponse<ConstructorStanding>>, AppError> {
    pagination.validate()?;
    let controller = StandingsController::new(state.pool.clone());
    let response = controller.constructors(year, pagination).await?;
    Ok(Json(response))
}
