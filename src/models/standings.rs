//! Modelos de Standings
//!
//! Agregados por temporada que devuelven las consultas de clasificación.

use serde::Serialize;
use sqlx::FromRow;

/// Totales de un piloto en una temporada
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct DriverStanding {
    pub driver_id: i64,
    pub driver_ref: String,
    pub code: Option<String>,
    pub forename: String,
    pub surname: String,
    pub nationality: Option<String>,
    pub points: f64,
    pub wins: i64,
    pub starts: i64,
}

/// Totales de un constructor en una temporada
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct ConstructorStanding {
    pub constructor_id: i64,
    pub constructor_ref: String,
    pub name: String,
    pub nationality: Option<String>,
    pub points: f64,
    pub wins: i64,
    pub starts: i64,
}

/// Agregado de temporada de un piloto; todo a cero si no corrió ese año
#[derive(Debug, Clone, Default, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SeasonTotals {
    pub points: f64,
    pub wins: i64,
    pub podiums: i64,
    pub starts: i64,
}
