// src/api/routes.rs
use actix_web::web;

use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(handlers::health_check))
            .route("/options", web::get().to(handlers::list_options))
            .route("/simulate", web::post().to(handlers::simulate)),
    );
}
