use serde::{Deserialize, Serialize};

use crate::dto::pagination_dto::PaginatedResponse;
use crate::models::result::SeasonRaceResult;
use crate::models::standings::SeasonTotals;
use crate::services::standings_service::Ranked;

// Response de `/seasons/:year/driver-standings` y `/seasons/:year/constructor-standings`
#[derive(Debug, Serialize)]
pub struct StandingsResponse<T> {
    pub year: i64,
    #[serde(flatten)]
    pub page: PaginatedResponse<Ranked<T>>,
}

// Query de `/drivers/:driver_id/seasons/:year`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SeasonSummaryParams {
    #[serde(default)]
    pub include_results: bool,
}

// Response del resumen de temporada de un piloto
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonSummaryResponse {
    pub driver_id: i64,
    pub year: i64,
    #[serde(flatten)]
    pub totals: SeasonTotals,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<SeasonRaceResult>>,
}
