use actix_web::web;

use crate::middleware::json_error_handler;

pub mod financing;
pub mod health;

/// Register every route of the application
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .configure(health::configure_health_routes)
        .configure(financing::configure_financing_routes);
}
