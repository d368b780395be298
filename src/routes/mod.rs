pub mod constructor_routes;
pub mod driver_routes;
pub mod health_routes;
pub mod race_routes;
pub mod season_routes;
