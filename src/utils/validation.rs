//! Utilidades de validación
//!
//! Este módulo contiene los helpers compartidos que validan los años
//! solicitados contra el rango real de temporadas del dataset.

use serde::Serialize;

use crate::utils::errors::{bad_request_error, AppResult};

/// Rango de temporadas presente en la tabla races
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearBounds {
    pub min_year: i64,
    pub max_year: i64,
}

impl YearBounds {
    /// Construir el rango a partir de `SELECT MIN(year), MAX(year)`; una tabla vacía no tiene rango
    pub fn from_aggregate(min_year: Option<i64>, max_year: Option<i64>) -> Option<Self> {
        match (min_year, max_year) {
            (Some(min_year), Some(max_year)) => Some(Self { min_year, max_year }),
            _ => None,
        }
    }

    pub fn contains(&self, year: i64) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }
}

/// Validar que un año esté dentro del rango del dataset
pub fn validate_year_in_bounds(year: i64, bounds: Option<YearBounds>) -> AppResult<()> {
    match bounds {
        Some(bounds) if bounds.contains(year) => Ok(()),
        Some(bounds) => Err(bad_request_error(&format!(
            "year must be between {} and {}, got {}",
            bounds.min_year, bounds.max_year, year
        ))),
        None => Err(bad_request_error("no seasons are available in the dataset")),
    }
}
