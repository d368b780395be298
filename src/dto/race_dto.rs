use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::pagination_dto::{PaginatedResponse, PaginationParams, DEFAULT_LIMIT};
use crate::models::race::{Race, RaceSummary};
use crate::models::result::RaceResult;

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

// Query de `/races`; el año ausente se resuelve contra MAX(year) en cada request
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct RaceListParams {
    pub year: Option<i64>,

    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 200))]
    pub limit: i64,

    #[serde(default)]
    #[validate(range(min = 0))]
    pub offset: i64,
}

impl RaceListParams {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams {
            limit: self.limit,
            offset: self.offset,
        }
    }
}

// Response de `/races`
#[derive(Debug, Serialize)]
pub struct RaceListResponse {
    pub year: Option<i64>,
    #[serde(flatten)]
    pub page: PaginatedResponse<Race>,
}

// Response de `/races/:race_id/results`: el resumen de la carrera junto a la página de resultados
#[derive(Debug, Serialize)]
pub struct RaceResultsResponse {
    #[serde(flatten)]
    pub race: RaceSummary,
    #[serde(flatten)]
    pub page: PaginatedResponse<RaceResult>,
}
