pub mod controllers;

pub use controllers::configure as configure_health_routes;
