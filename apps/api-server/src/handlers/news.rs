//! News article handlers.

use actix_web::{HttpResponse, web};

use arena_core::domain::{NewsCategory, NewsDraft, NewsPatch, Role};
use arena_core::import::DEFAULT_AUTHOR;
use arena_core::slug::unique_slug;
use arena_shared::ApiResponse;
use arena_shared::dto::{CreateNewsRequest, UpdateNewsRequest};

use crate::handlers::{ListQuery, today};
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/news?category=<c>
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let mut articles = state.news.list().await?;
    if let Some(raw) = &query.category {
        let category: NewsCategory = raw.parse()?;
        articles.retain(|a| a.category == category);
    }
    Ok(HttpResponse::Ok().json(ApiResponse::ok(articles)))
}

/// GET /api/news/featured
pub async fn list_featured(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let articles = state.news.list_featured().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(articles)))
}

/// GET /api/news/{slug}
pub async fn get_by_slug(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let article = state
        .news
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("news article '{slug}' not found")))?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(article)))
}

/// POST /api/news - Protected (editor or above)
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateNewsRequest>,
) -> AppResult<HttpResponse> {
    identity.require(Role::Editor)?;
    let req = body.into_inner();

    if req.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }
    if req.content.trim().is_empty() {
        return Err(AppError::BadRequest("Content is required".to_string()));
    }

    let slug = match req.slug.filter(|s| !s.trim().is_empty()) {
        Some(slug) => slug,
        None => unique_slug(&req.title),
    };

    let draft = NewsDraft {
        title: req.title,
        content: req.content,
        excerpt: req.excerpt,
        image: req.image.unwrap_or_default(),
        category: req.category.parse()?,
        date: req.date.unwrap_or_else(today),
        slug,
        featured: req.featured,
        author: req.author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
    };

    let article = state.news.create(draft).await?;
    tracing::info!(id = %article.id, slug = %article.slug, "News article created");
    Ok(HttpResponse::Created().json(ApiResponse::ok(article)))
}

/// PUT /api/news/{id} - Protected (editor or above)
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<UpdateNewsRequest>,
) -> AppResult<HttpResponse> {
    identity.require(Role::Editor)?;
    let id = path.into_inner();
    let req = body.into_inner();

    let patch = NewsPatch {
        title: req.title,
        content: req.content,
        excerpt: req.excerpt,
        image: req.image,
        category: req.category.map(|c| c.parse()).transpose()?,
        date: req.date,
        slug: req.slug,
        featured: req.featured,
        author: req.author,
    };

    let article = state.news.update(&id, patch).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(article)))
}

/// DELETE /api/news/{id} - Protected (admin only)
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    identity.require(Role::Admin)?;
    let id = path.into_inner();

    state.news.delete(&id).await?;
    tracing::info!(%id, "News article deleted");
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message((), "News article deleted")))
}
