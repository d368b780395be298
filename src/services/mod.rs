//! Services module
//!
//! Este módulo contiene la lógica pura que no depende de la base de datos,
//! para poder probarla de forma aislada.

pub mod standings_service;

pub use standings_service::*;
