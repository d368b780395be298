//! Modelos de Result
//!
//! Filas de la tabla results unidas a driver, constructor y status.

use serde::Serialize;
use sqlx::FromRow;

/// Resultado de un piloto en una carrera
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct RaceResult {
    pub result_id: i64,
    pub driver_id: i64,
    pub driver_name: String,
    pub constructor_id: i64,
    pub constructor_name: String,
    pub number: Option<String>,
    pub grid: Option<i64>,
    /// Texto original; `\N` para los que no terminaron
    pub position: Option<String>,
    pub position_order: i64,
    pub points: f64,
    pub laps: Option<i64>,
    pub time: Option<String>,
    pub milliseconds: Option<i64>,
    pub fastest_lap: Option<String>,
    pub fastest_lap_time: Option<String>,
    pub status_id: i64,
    pub status: String,
}

/// Resultado de un piloto dentro de su resumen de temporada
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct SeasonRaceResult {
    pub race_id: i64,
    pub round: i64,
    pub race_name: String,
    pub position: Option<String>,
    pub position_order: i64,
    pub points: f64,
    pub constructor_name: String,
    pub status: String,
}
