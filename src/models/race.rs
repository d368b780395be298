//! Modelos de Race
//!
//! Este módulo contiene la fila de races y sus variantes: el detalle unido
//! al circuito y el resumen que acompaña a los resultados de carrera.

use serde::Serialize;
use sqlx::FromRow;

/// Race principal - una fila de la tabla races
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Race {
    pub race_id: i64,
    pub year: i64,
    pub round: i64,
    pub circuit_id: i64,
    pub name: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub url: Option<String>,
}

/// Race unida a su circuito; `circuitName` y `circuitUrl` evitan el choque con los campos de la carrera
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct RaceDetail {
    pub race_id: i64,
    pub year: i64,
    pub round: i64,
    pub circuit_id: i64,
    pub name: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub url: Option<String>,
    pub circuit_ref: String,
    pub circuit_name: String,
    pub location: Option<String>,
    pub country: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    /// `null` cuando el CSV traía `\N`
    pub alt: Option<i64>,
    pub circuit_url: Option<String>,
}

/// Campos de la carrera que acompañan a sus resultados
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct RaceSummary {
    pub race_id: i64,
    pub year: i64,
    pub round: i64,
    pub name: String,
    pub date: Option<String>,
}
