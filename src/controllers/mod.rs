pub mod constructor_controller;
pub mod driver_controller;
pub mod race_controller;
pub mod standings_controller;
