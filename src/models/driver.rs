//! Modelo de Driver
//!
//! Mapea exactamente a la tabla drivers cargada por el loader.

use serde::Serialize;
use sqlx::FromRow;

/// Driver principal - una fila de la tabla drivers
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Driver {
    pub driver_id: i64,
    pub driver_ref: String,
    pub number: Option<String>,
    pub code: Option<String>,
    pub forename: String,
    pub surname: String,
    pub dob: Option<String>,
    pub nationality: Option<String>,
    pub url: Option<String>,
}
