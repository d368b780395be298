//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean las filas del
//! dataset SQLite. Las columnas usan camelCase, igual que los CSV de origen.

pub mod constructor;
pub mod driver;
pub mod race;
pub mod result;
pub mod standings;
