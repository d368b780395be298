//! F1 Stats API
//!
//! Servicio HTTP de solo lectura sobre el dataset histórico de Fórmula 1
//! (circuits, constructors, drivers, races, status, results) cargado en SQLite.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::Router;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use middleware::cors::cors_middleware;
use state::AppState;

/// Crear el router principal de la API
pub fn create_app(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);

    Router::new()
        .merge(routes::health_routes::create_health_router())
        .nest("/drivers", routes::driver_routes::create_driver_router())
        .nest("/races", routes::race_routes::create_race_router())
        .nest("/seasons", routes::season_routes::create_season_router())
        .nest("/constructors", routes::constructor_routes::create_constructor_router())
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
