//! DTOs de la API
//!
//! Parámetros de query validados y payloads de respuesta.

pub mod pagination_dto;
pub mod race_dto;
pub mod season_dto;
