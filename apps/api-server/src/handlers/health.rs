//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub collections: CollectionCounts,
}

/// Record counts per content collection; doubles as a storage probe.
#[derive(Serialize)]
pub struct CollectionCounts {
    pub news: usize,
    pub blog: usize,
    pub matches: usize,
}

/// Health check endpoint. Reports `degraded` when any content collection
/// cannot be read (its count then shows as 0).
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let news = state.news.list().await;
    let blog = state.blogs.list().await;
    let matches = state.matches.list().await;

    let status = if news.is_ok() && blog.is_ok() && matches.is_ok() {
        "ok"
    } else {
        "degraded"
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        collections: CollectionCounts {
            news: news.map(|r| r.len()).unwrap_or(0),
            blog: blog.map(|r| r.len()).unwrap_or(0),
            matches: matches.map(|r| r.len()).unwrap_or(0),
        },
    };

    HttpResponse::Ok().json(response)
}
