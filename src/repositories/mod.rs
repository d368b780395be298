pub mod constructor_repository;
pub mod driver_repository;
pub mod race_repository;
pub mod result_repository;
pub mod standings_repository;
