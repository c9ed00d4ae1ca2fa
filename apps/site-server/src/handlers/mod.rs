//! HTTP handlers and route configuration.

mod drafts;
mod health;
mod pages;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            // Reader pages
            .route("/home", web::get().to(pages::home))
            .route("/database", web::get().to(pages::database))
            .route("/posts/{slug}", web::get().to(pages::post))
            // Authoring
            .route("/drafts", web::post().to(drafts::generate)),
    );
}
