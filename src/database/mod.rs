//! Módulo de base de datos
//!
//! Maneja la conexión de solo lectura con el dataset SQLite

pub mod connection;

pub use connection::DatabaseConnection;
