use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use validator::Validate;
use crate::controllers::race_controller::RaceController;
use crate::dto::pagination_dto::PaginationParams;
use crate::dto::race_dto::{RaceListParams, RaceListResponse, RaceResultsResponse};
use crate::models::race::RaceDetail;
use crate::state::AppState;
use crate::utils::extractors::{ApiPath, ApiQuery};
use crate::utils::errors::AppError;

pub fn create_race_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_races))
        .route("/:race_id", get(get_race))
        .route("/:race_id/results", get(get_race_results))
}

async fn list_races(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<RaceListParams>,
) -> Result<Json<RaceListResponse>, AppError> {
    params.validate()?;
    let controller = RaceController::new(state.pool.clone());
    let response = controller.list(params.year, params.pagination()).await?;
    Ok(Json(response))
}

async fn get_race(
    State(state): State<AppState>,
    ApiPath(race_id): ApiPath<i64>,
) -> Result<Json<RaceDetail>, AppError> {
    let controller = RaceController::new(state.pool.clone());
    let response = controller.get_by_id(race_id).await?;
    Ok(Json(response))
}

async fn get_race_results(
    State(state): State<AppState>,
    ApiPath(race_id): ApiPath<i64>,
    ApiQuery(pagination): ApiQuery<PaginationParams>,
) -> Result<Json<RaceResultsResponse>, AppError> {
    pagination.validate()?;
    let controller = RaceController::new(state.pool.clone());
    let response = controller.results(race_id, pagination).await?;
    Ok(Json(response))
}
