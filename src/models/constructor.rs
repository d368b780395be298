//! Modelo de Constructor
//!
//! Mapea exactamente a la tabla constructors cargada por el loader.

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Constructor {
    pub constructor_id: i64,
    pub constructor_ref: String,
    pub name: String,
    pub nationality: Option<String>,
    pub url: Option<String>,
}
