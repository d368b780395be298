use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_LIMIT: i64 = 50;
pub const MAX_LIMIT: i64 = 200;

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

// Query `?limit=&offset=` compartida por todos los listados
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct PaginationParams {
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 200))]
    pub limit: i64,

    #[serde(default)]
    #[validate(range(min = 0))]
    pub offset: i64,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

// Página de resultados; `count` es el número de filas devueltas en esta página
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub count: usize,
    pub limit: i64,
    pub offset: i64,
    pub results: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    pub fn new(results: Vec<T>, pagination: PaginationParams) -> Self {
        Self {
            count: results.len(),
            limit: pagination.limit,
            offset: pagination.offset,
            results,
        }
    }
}
