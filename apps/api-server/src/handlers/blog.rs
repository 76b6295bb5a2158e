//! Blog post handlers, including batch import from source-file URLs.

use actix_web::{HttpResponse, web};

use arena_core::domain::{BlogCategory, BlogDraft, BlogPatch, Role, estimate_read_time};
use arena_core::import::DEFAULT_AUTHOR;
use arena_core::slug::unique_slug;
use arena_shared::ApiResponse;
use arena_shared::dto::{CreateBlogRequest, ImportBlogsRequest, UpdateBlogRequest};

use crate::handlers::{ListQuery, today};
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/blog?category=<c>
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let mut posts = state.blogs.list().await?;
    if let Some(raw) = &query.category {
        let category: BlogCategory = raw.parse()?;
        posts.retain(|p| p.category == category);
    }
    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/blog/featured
pub async fn list_featured(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.blogs.list_featured().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/blog/{slug}
pub async fn get_by_slug(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let post = state
        .blogs
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("blog post '{slug}' not found")))?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}

/// POST /api/blog - Protected (editor or above)
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateBlogRequest>,
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
    let read_time = req
        .read_time
        .unwrap_or_else(|| estimate_read_time(&req.content));

    let draft = BlogDraft {
        title: req.title,
        content: req.content,
        excerpt: req.excerpt,
        image: req.image.unwrap_or_default(),
        category: req.category.parse()?,
        date: req.date.unwrap_or_else(today),
        slug,
        featured: req.featured,
        author: req.author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        read_time,
        tags: req.tags,
    };

    let post = state.blogs.create(draft).await?;
    tracing::info!(id = %post.id, slug = %post.slug, "Blog post created");
    Ok(HttpResponse::Created().json(ApiResponse::ok(post)))
}

/// POST /api/blog/import - Protected (editor or above)
///
/// Fetches each URL, parses the source file and stores the resulting posts.
/// Individual failures are reported per URL without aborting the batch.
pub async fn import(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<ImportBlogsRequest>,
) -> AppResult<HttpResponse> {
    identity.require(Role::Editor)?;
    let req = body.into_inner();

    if req.urls.is_empty() {
        return Err(AppError::BadRequest("No URLs provided".to_string()));
    }

    let report = state.importer.import(state.blogs.as_ref(), &req.urls).await;
    tracing::info!(
        imported = report.imported,
        failed = report.failed,
        "Blog import finished"
    );
    Ok(HttpResponse::Ok().json(ApiResponse::ok(report)))
}

/// PUT /api/blog/{id} - Protected (editor or above)
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<UpdateBlogRequest>,
) -> AppResult<HttpResponse> {
    identity.require(Role::Editor)?;
    let id = path.into_inner();
    let req = body.into_inner();

    let patch = BlogPatch {
        title: req.title,
        content: req.content,
        excerpt: req.excerpt,
        image: req.image,
        category: req.category.map(|c| c.parse()).transpose()?,
        date: req.date,
        slug: req.slug,
        featured: req.featured,
        author: req.author,
        read_time: req.read_time,
        tags: req.tags,
    };

    let post = state.blogs.update(&id, patch).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}

/// DELETE /api/blog/{id} - Protected (admin only)
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    identity.require(Role::Admin)?;
    let id = path.into_inner();

    state.blogs.delete(&id).await?;
    tracing::info!(%id, "Blog post deleted");
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message((), "Blog post deleted")))
}
