//! HTTP handlers and route configuration.

mod auth;
mod blog;
mod health;
mod matches;
mod news;
mod upload;

use actix_web::web;
use serde::Deserialize;

/// Query parameters accepted by the content listings.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListQuery {
    pub category: Option<String>,
}

/// Today's date in the `YYYY-MM-DD` form the content records carry.
pub(crate) fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            .service(
                web::scope("/news")
                    .route("", web::get().to(news::list))
                    .route("", web::post().to(news::create))
                    .route("/featured", web::get().to(news::list_featured))
                    .route("/{slug}", web::get().to(news::get_by_slug))
                    .route("/{id}", web::put().to(news::update))
                    .route("/{id}", web::delete().to(news::delete)),
            )
            .service(
                web::scope("/blog")
                    .route("", web::get().to(blog::list))
                    .route("", web::post().to(blog::create))
                    .route("/featured", web::get().to(blog::list_featured))
                    .route("/import", web::post().to(blog::import))
                    .route("/{slug}", web::get().to(blog::get_by_slug))
                    .route("/{id}", web::put().to(blog::update))
                    .route("/{id}", web::delete().to(blog::delete)),
            )
            .service(
                web::scope("/matches")
                    .route("", web::get().to(matches::list))
                    .route("", web::post().to(matches::create))
                    .route("/upcoming", web::get().to(matches::list_upcoming))
                    .route("/completed", web::get().to(matches::list_completed))
                    .route("/{id}", web::put().to(matches::update))
                    .route("/{id}", web::delete().to(matches::delete)),
            )
            .route("/upload", web::post().to(upload::upload)),
    );
}
